//! Property-based tests for validation logic
//!
//! These verify the character-class rules and title casing hold for
//! arbitrary inputs, not just the handful of names in the unit tests.

#[cfg(test)]
mod tests {
    use crate::core::validation::*;
    use crate::student::{Field, Student};
    use proptest::prelude::*;

    // Strategy for strings holding at least one character outside the name alphabet
    prop_compose! {
        fn name_with_non_letter()(
            prefix in "[a-zA-Z]{0,8}",
            bad in "[0-9 _.'@-]",
            suffix in "[a-zA-Z0-9]{0,8}",
        ) -> String {
            format!("{prefix}{bad}{suffix}")
        }
    }

    proptest! {
        #[test]
        fn test_alphabetic_names_are_accepted(name in "[a-zA-Z]{0,32}") {
            prop_assert!(validate_person_name(Field::FirstName, &name).is_ok());
            let student = Student::new(&name, &name, "").unwrap();
            prop_assert_eq!(student.first_name(), title_case(&name));
            prop_assert_eq!(student.last_name(), title_case(&name));
        }

        #[test]
        fn test_names_with_non_letters_are_rejected(name in name_with_non_letter()) {
            prop_assert!(validate_person_name(Field::LastName, &name).is_err());
            prop_assert!(Student::new(&name, "Smith", "Math").is_err());
            prop_assert!(Student::new("John", &name, "Math").is_err());
        }

        #[test]
        fn test_alphanumeric_courses_are_accepted(course in "[a-zA-Z0-9 ]{0,40}") {
            prop_assert!(validate_course_name(&course).is_ok());
        }

        #[test]
        fn test_courses_with_punctuation_are_rejected(
            head in "[a-zA-Z0-9 ]{0,10}",
            bad in "[-+#&/.,:!?]",
            tail in "[a-zA-Z0-9 ]{0,10}",
        ) {
            let course = format!("{head}{bad}{tail}");
            let err = validate_course_name(&course).unwrap_err();
            prop_assert_eq!(err.field(), Field::CourseName);
        }

        #[test]
        fn test_title_case_is_idempotent(value in "[a-zA-Z0-9 ]{0,40}") {
            let once = title_case(&value);
            prop_assert_eq!(title_case(&once), once.clone());
            prop_assert_eq!(once.len(), value.len());
        }
    }
}
