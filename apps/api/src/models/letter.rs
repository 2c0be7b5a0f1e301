use serde::{Deserialize, Serialize};

/// The full set of form field values for one leave-letter request.
///
/// All fields arrive as plain strings with camelCase wire names, exactly as
/// the form submits them. The record lives only for the duration of the
/// request; it is rendered once and discarded, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestRecord {
    pub full_name: String,
    pub course: String,
    pub room_number: String,
    pub hostel_address: String,
    pub leave_start: String,
    pub leave_end: String,
    pub reason: String,
    pub home_address: String,
    /// Derived on the form: always mirrors `leave_end` at submission time.
    pub return_date: String,
    pub roll_number: String,
    pub contact_number: String,
}

impl LeaveRequestRecord {
    /// Every field paired with its wire name, in form order.
    /// All eleven are required; validation iterates this list.
    pub fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("fullName", &self.full_name),
            ("course", &self.course),
            ("roomNumber", &self.room_number),
            ("hostelAddress", &self.hostel_address),
            ("leaveStart", &self.leave_start),
            ("leaveEnd", &self.leave_end),
            ("reason", &self.reason),
            ("homeAddress", &self.home_address),
            ("returnDate", &self.return_date),
            ("rollNumber", &self.roll_number),
            ("contactNumber", &self.contact_number),
        ]
    }
}
