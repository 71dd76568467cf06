/// Public PokeAPI v2 root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Resources that can be requested directly by identifier.
///
/// Species and evolution chains are never addressed by the caller: their
/// URLs come embedded in the previous response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// /pokemon/{ID_OR_NAME}
    Pokemon(String),
}

impl Endpoint {
    /// Path segments below the API root
    pub fn segments(&self) -> [&str; 2] {
        match self {
            Self::Pokemon(id) => ["pokemon", id.as_str()],
        }
    }
}
