//! The form's field table.
//!
//! One explicit, ordered list of field descriptors drives the whole form:
//! which widget each field gets, its label and placeholder, and the one
//! derived-field rule. Nothing inspects record keys at render time.

use strum::IntoEnumIterator;

use crate::models::Course;

/// Which input widget a field renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Date,
    /// A fixed-choice dropdown.
    Enum { options: Vec<String> },
    /// Read-only; mechanically mirrors another field's value.
    Derived { source: &'static str },
}

/// One form field: wire name, visible label, placeholder text, widget kind.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
    ) -> Self {
        FieldDescriptor {
            name,
            label,
            placeholder,
            kind,
        }
    }
}

/// The eleven fields of a leave request, in form order.
pub fn field_descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("fullName", "Full Name", "Enter your full name", FieldKind::Text),
        FieldDescriptor::new(
            "course",
            "Course",
            "Select your course",
            FieldKind::Enum {
                options: Course::iter().map(|c| c.to_string()).collect(),
            },
        ),
        FieldDescriptor::new(
            "roomNumber",
            "Room Number",
            "Enter your hostel room number",
            FieldKind::Text,
        ),
        FieldDescriptor::new(
            "hostelAddress",
            "Hostel Address",
            "Enter your hostel Name",
            FieldKind::Text,
        ),
        FieldDescriptor::new(
            "leaveStart",
            "Leave Start",
            "Select leave start date",
            FieldKind::Date,
        ),
        FieldDescriptor::new("leaveEnd", "Leave End", "Select leave end date", FieldKind::Date),
        FieldDescriptor::new("reason", "Reason", "Reason for leave", FieldKind::Text),
        FieldDescriptor::new(
            "homeAddress",
            "Home Address",
            "Enter your home address",
            FieldKind::Text,
        ),
        FieldDescriptor::new(
            "returnDate",
            "Return Date",
            "Auto-filled from Leave End",
            FieldKind::Derived { source: "leaveEnd" },
        ),
        FieldDescriptor::new(
            "rollNumber",
            "Roll Number",
            "Enter your roll number",
            FieldKind::Text,
        ),
        FieldDescriptor::new(
            "contactNumber",
            "Contact Number",
            "Enter your contact number",
            FieldKind::Text,
        ),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_fields_in_form_order() {
        let names: Vec<&str> = field_descriptors().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "fullName",
                "course",
                "roomNumber",
                "hostelAddress",
                "leaveStart",
                "leaveEnd",
                "reason",
                "homeAddress",
                "returnDate",
                "rollNumber",
                "contactNumber",
            ]
        );
    }

    #[test]
    fn test_course_offers_the_six_fixed_options() {
        let fields = field_descriptors();
        let course = fields.iter().find(|f| f.name == "course").unwrap();
        match &course.kind {
            FieldKind::Enum { options } => {
                assert_eq!(options.len(), 6);
                assert!(options.contains(&"B.Tech CSE".to_string()));
                assert!(options.contains(&"B.Tech AI-ML".to_string()));
            }
            other => panic!("course should be an Enum field, got {other:?}"),
        }
    }

    #[test]
    fn test_return_date_is_derived_from_leave_end() {
        let fields = field_descriptors();
        let return_date = fields.iter().find(|f| f.name == "returnDate").unwrap();
        assert_eq!(
            return_date.kind,
            FieldKind::Derived { source: "leaveEnd" }
        );
    }

    #[test]
    fn test_leave_window_fields_are_date_inputs() {
        let fields = field_descriptors();
        for name in ["leaveStart", "leaveEnd"] {
            let field = fields.iter().find(|f| f.name == name).unwrap();
            assert_eq!(field.kind, FieldKind::Date, "{name} should be a date input");
        }
    }

    #[test]
    fn test_descriptor_names_match_record_wire_names() {
        use crate::models::LeaveRequestRecord;

        let record = LeaveRequestRecord {
            full_name: String::new(),
            course: String::new(),
            room_number: String::new(),
            hostel_address: String::new(),
            leave_start: String::new(),
            leave_end: String::new(),
            reason: String::new(),
            home_address: String::new(),
            return_date: String::new(),
            roll_number: String::new(),
            contact_number: String::new(),
        };
        let record_names: Vec<&str> = record.fields().iter().map(|(n, _)| *n).collect();
        let descriptor_names: Vec<&str> = field_descriptors().iter().map(|f| f.name).collect();
        assert_eq!(descriptor_names, record_names);
    }
}
