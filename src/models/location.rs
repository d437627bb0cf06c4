//! Location-area models.

use serde::Deserialize;

/// A `{name, url}` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /location-area`.
///
/// `next` and `previous` are `null` at the ends of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    pub id: u32,
    pub name: String,
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

impl LocationAreaDetail {
    /// Names of the pokemon that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}

/// A pokemon that can be met in an area.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize_with_null_cursors() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_detail_pokemon_names() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u"}, "version_details": []},
                {"pokemon": {"name": "tentacruel", "url": "u"}, "version_details": []}
            ]
        }"#;
        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.pokemon_names(), vec!["tentacool", "tentacruel"]);
        assert_eq!(detail.location.unwrap().name, "canalave-city");
    }

    #[test]
    fn test_detail_without_encounters() {
        let detail: LocationAreaDetail =
            serde_json::from_str(r#"{"id": 7, "name": "empty-area", "location": null}"#).unwrap();
        assert!(detail.pokemon_names().is_empty());
    }

    #[test]
    fn test_page_rejects_wrong_shape() {
        let result: Result<LocationAreaPage, _> = serde_json::from_str(r#"{"results": 3}"#);
        assert!(result.is_err());
    }
}
