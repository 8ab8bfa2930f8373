use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

/// The one JSON document shape understood by the JSON word counter.
///
/// Decoding is lenient about everything but types:
/// - member names match case-insensitively and unknown members are ignored;
/// - a `null` member, or a `null` document, leaves the field as it was;
/// - of two members with the same name, the later value wins;
/// - a member of the wrong type fails the whole decode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub address: Address,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Person {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let mut person = Person::default();
        person.merge(value)?;
        Ok(person)
    }

    fn merge(&mut self, value: Value) -> Result<(), serde_json::Error> {
        for (key, value) in members(value)? {
            match key.to_lowercase().as_str() {
                "name" => set(&mut self.name, value)?,
                "age" => set(&mut self.age, value)?,
                "email" => set(&mut self.email, value)?,
                "address" => self.address.merge(value)?,
                "hobbies" => {
                    if let Some(hobbies) = decode::<Vec<Option<String>>>(value)? {
                        self.hobbies = hobbies.into_iter().map(Option::unwrap_or_default).collect();
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// The field values counted as words, each one a single token.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_str(),
            self.email.as_str(),
            self.address.street.as_str(),
            self.address.city.as_str(),
            self.address.state.as_str(),
            self.address.zip.as_str(),
        ]
        .into_iter()
        .chain(self.hobbies.iter().map(String::as_str))
    }
}

impl Address {
    fn merge(&mut self, value: Value) -> Result<(), serde_json::Error> {
        for (key, value) in members(value)? {
            match key.to_lowercase().as_str() {
                "street" => set(&mut self.street, value)?,
                "city" => set(&mut self.city, value)?,
                "state" => set(&mut self.state, value)?,
                "zip" => set(&mut self.zip, value)?,
                _ => {}
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Person {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Person::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// `None` for `null`, otherwise the value decoded as `T`.
fn decode<T: DeserializeOwned>(value: Value) -> Result<Option<T>, serde_json::Error> {
    serde_json::from_value(value)
}

fn members(value: Value) -> Result<Map<String, Value>, serde_json::Error> {
    Ok(decode(value)?.unwrap_or_default())
}

fn set<T: DeserializeOwned>(field: &mut T, value: Value) -> Result<(), serde_json::Error> {
    if let Some(decoded) = decode(value)? {
        *field = decoded;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_fields_are_left_empty() {
        let_assert!(Ok(person) = serde_json::from_value::<Person>(json!({ "name": "Ann" })));
        check!(person.name == "Ann");
        check!(person.age == 0);
        check!(person.address == Address::default());
        check!(person.hobbies.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let value = json!({ "name": "Ann", "nickname": "A", "address": { "country": "Z" } });
        let_assert!(Ok(person) = serde_json::from_value::<Person>(value));
        check!(person.name == "Ann");
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let_assert!(Err(_) = serde_json::from_value::<Person>(json!({ "age": "five" })));
        let_assert!(Err(_) = serde_json::from_value::<Person>(json!({ "hobbies": "golf" })));
    }

    #[test]
    fn null_members_are_left_empty() {
        let value = json!({ "name": null, "email": "e", "address": null, "hobbies": null });
        let_assert!(Ok(person) = serde_json::from_value::<Person>(value));
        check!(person.name == "");
        check!(person.email == "e");
        check!(person.address == Address::default());
        check!(person.hobbies.is_empty());
    }

    #[test]
    fn null_document_is_an_empty_record() {
        let_assert!(Ok(person) = serde_json::from_str::<Person>("null"));
        check!(person == Person::default());
    }

    #[test]
    fn null_hobby_is_an_empty_word() {
        let value = json!({ "hobbies": [null, "golf"] });
        let_assert!(Ok(person) = serde_json::from_value::<Person>(value));
        check!(person.hobbies == ["", "golf"]);
    }

    #[test]
    fn null_does_not_clear_an_earlier_value() {
        let input = r#"{"Name": "Ann", "name": null}"#;
        let_assert!(Ok(person) = serde_json::from_str::<Person>(input));
        check!(person.name == "Ann");
    }

    #[test]
    fn later_duplicate_member_wins() {
        let_assert!(Ok(person) = serde_json::from_str::<Person>(r#"{"name": "A", "name": "B"}"#));
        check!(person.name == "B");
    }

    #[test]
    fn member_names_match_case_insensitively() {
        let value = json!({ "Name": "Ann", "EMAIL": "a@x.com", "Address": { "City": "X" } });
        let_assert!(Ok(person) = serde_json::from_value::<Person>(value));
        check!(person.name == "Ann");
        check!(person.email == "a@x.com");
        check!(person.address.city == "X");
    }

    #[test]
    fn non_object_document_is_rejected() {
        let_assert!(Err(_) = serde_json::from_value::<Person>(json!(5)));
        let_assert!(Err(_) = serde_json::from_value::<Person>(json!(["Ann"])));
        let_assert!(Err(_) = serde_json::from_value::<Person>(json!({ "address": "1 St" })));
    }

    #[test]
    fn words_lists_fixed_fields_then_hobbies() {
        let person = Person {
            name: "Ann".to_string(),
            age: 5,
            email: "a@x.com".to_string(),
            address: Address {
                street: "1 St".to_string(),
                city: "X".to_string(),
                state: "Y".to_string(),
                zip: "1".to_string(),
            },
            hobbies: vec!["golf".to_string(), "chess".to_string()],
        };

        let words: Vec<&str> = person.words().collect();
        check!(words == ["Ann", "a@x.com", "1 St", "X", "Y", "1", "golf", "chess"]);
    }
}
