use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::models::Account;

/// Request body for creating or replacing an account. `phone_number` also
/// accepts a bare JSON number, which is coerced to its string representation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AccountData {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(deserialize_with = "phone_number_as_string")]
    #[schema(value_type = String, example = "555-1234")]
    pub phone_number: String,
    #[schema(value_type = Option<String>, example = "2022-01-01")]
    pub date_joined: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    #[schema(example = "2022-01-01")]
    pub date_joined: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            address: account.address,
            phone_number: account.phone_number,
            date_joined: account.date_joined.to_string(),
        }
    }
}

fn phone_number_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PhoneNumber {
        Text(String),
        Numeric(serde_json::Number),
    }

    Ok(match PhoneNumber::deserialize(deserializer)? {
        PhoneNumber::Text(text) => text,
        PhoneNumber::Numeric(number) => number.to_string(),
    })
}
