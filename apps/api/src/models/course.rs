use strum::{Display, EnumIter, EnumString};

/// The fixed set of courses a leave request may name.
///
/// The serialized strings are the exact values the form submits; parsing a
/// string through `FromStr` doubles as the membership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum Course {
    #[strum(serialize = "B.Tech CSE")]
    BTechCse,
    #[strum(serialize = "B.Tech ECE")]
    BTechEce,
    #[strum(serialize = "B.Tech IT")]
    BTechIt,
    #[strum(serialize = "B.Tech ME")]
    BTechMe,
    #[strum(serialize = "B.Tech Civil")]
    BTechCivil,
    #[strum(serialize = "B.Tech AI-ML")]
    BTechAiMl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_six_courses_parse_from_display_form() {
        for course in Course::iter() {
            let parsed: Course = course
                .to_string()
                .parse()
                .unwrap_or_else(|_| panic!("{course} should round-trip through FromStr"));
            assert_eq!(parsed, course);
        }
    }

    #[test]
    fn test_course_list_has_six_entries() {
        assert_eq!(Course::iter().count(), 6);
    }

    #[test]
    fn test_unknown_course_rejected() {
        assert!("B.Tech Astrology".parse::<Course>().is_err());
        assert!("".parse::<Course>().is_err());
        // Case matters: the form submits the exact option strings.
        assert!("b.tech cse".parse::<Course>().is_err());
    }
}
