pub mod analytics;
pub mod customers;
pub mod interactions;
pub mod leads;
pub mod pages;

use serde::{Deserialize, Deserializer};

// Formulários HTML mandam campos opcionais vazios como "", não como
// ausentes. Aqui "" (ou só espaços) vira None.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
