use crate::shared::entity::{Entity, ID};

/// A participant of a `Booking` as seen by the contact directory
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: ID,
    pub display_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Whether this `Person` offers sessions that can be booked
    pub is_provider: bool,
}

impl Person {
    pub fn new(display_name: String) -> Self {
        Self {
            id: Default::default(),
            display_name,
            phone: None,
            email: None,
            is_provider: false,
        }
    }

    /// The phone number, ignoring blank values
    pub fn phone(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    /// The email address, ignoring blank values
    pub fn email(&self) -> Option<&str> {
        non_blank(&self.email)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

impl Entity for Person {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_contact_fields_are_missing() {
        let mut person = Person::new("Ada".into());
        assert_eq!(person.phone(), None);
        person.phone = Some("   ".into());
        assert_eq!(person.phone(), None);
        person.phone = Some(" 593991234567 ".into());
        assert_eq!(person.phone(), Some("593991234567"));
        person.email = Some("".into());
        assert_eq!(person.email(), None);
    }
}
