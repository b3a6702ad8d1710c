//! URL construction helpers for PokeAPI endpoints.

use crate::models::PokeApiConfig;
use url::Url;

fn with_path(config: &PokeApiConfig, tail: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{tail}"));
    url
}

/// `{base}/pokemon?limit={limit}&offset={offset}`
pub fn build_list_url(config: &PokeApiConfig, limit: usize, offset: usize) -> Url {
    let mut url = with_path(config, "pokemon");
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string());
    url
}

/// `{base}/pokemon/{name}` with the name percent-encoded as one segment.
pub fn build_pokemon_url(config: &PokeApiConfig, name: &str) -> Url {
    with_path(config, &format!("pokemon/{}", urlencoding::encode(name)))
}

/// The pokemon name a detail URL refers to, if it is one.
pub fn pokemon_name_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/pokemon/")?;
    let segment = rest.split(['/', '?']).next()?;
    if segment.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(segment).ok()?;
    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PokeApiClientConfig;

    fn config(base: &str) -> PokeApiConfig {
        PokeApiConfig::from_public(&PokeApiClientConfig::new().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_list_url() {
        let url = build_list_url(&config("https://pokeapi.co/api/v2"), 20, 40);
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40");
    }

    #[test]
    fn test_pokemon_url() {
        let url = build_pokemon_url(&config("https://pokeapi.co/api/v2/"), "mr-mime");
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/mr-mime");
    }

    #[test]
    fn test_pokemon_url_encodes_separators() {
        let url = build_pokemon_url(&config("http://localhost:9000"), "a/b c");
        assert_eq!(url.as_str(), "http://localhost:9000/pokemon/a%2Fb%20c");
        assert_eq!(pokemon_name_from_url(url.as_str()), Some("a/b c".to_string()));
    }

    #[test]
    fn test_name_from_url() {
        assert_eq!(
            pokemon_name_from_url("https://pokeapi.co/api/v2/pokemon/pikachu"),
            Some("pikachu".to_string())
        );
        assert_eq!(
            pokemon_name_from_url("https://pokeapi.co/api/v2/pokemon/pikachu/"),
            Some("pikachu".to_string())
        );
        assert_eq!(pokemon_name_from_url("https://pokeapi.co/api/v2/pokemon?limit=1"), None);
    }
}
