use crate::models::Building;

/// Buildings whose name starts with `query`, ignoring case, in list order.
///
/// An empty query matches every building.
pub fn filter_buildings<'a>(query: &str, buildings: &'a [Building]) -> Vec<&'a Building> {
    let needle = query.to_lowercase();
    buildings
        .iter()
        .filter(|b| b.name.to_lowercase().starts_with(&needle))
        .collect()
}

/// What the search panel lists for the current input: nothing until the
/// user has typed something.
pub fn visible_results<'a>(query: &str, buildings: &'a [Building]) -> Vec<&'a Building> {
    if query.is_empty() {
        return Vec::new();
    }
    filter_buildings(query, buildings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::BuildingDirectory;

    fn names(results: &[&Building]) -> Vec<String> {
        results.iter().map(|b| b.name.clone()).collect()
    }

    #[test]
    fn test_single_letter_prefix() {
        let dir = BuildingDirectory::campus().unwrap();
        let result = filter_buildings("w", dir.all());
        assert_eq!(
            names(&result),
            vec!["Woorhees Computing Center", "Warren Hall", "West Hall"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let dir = BuildingDirectory::campus().unwrap();
        let result = filter_buildings("WARREN", dir.all());
        assert_eq!(names(&result), vec!["Warren Hall"]);
    }

    #[test]
    fn test_no_match() {
        let dir = BuildingDirectory::campus().unwrap();
        assert!(filter_buildings("xyz", dir.all()).is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let dir = BuildingDirectory::campus().unwrap();
        let result = filter_buildings("", dir.all());
        assert_eq!(result.len(), 18);
        for (got, expected) in result.iter().zip(dir.all()) {
            assert_eq!(got.name, expected.name);
        }
    }

    #[test]
    fn test_prefix_not_substring() {
        let dir = BuildingDirectory::campus().unwrap();
        // "Hall" appears inside several names but starts none of them
        assert!(filter_buildings("hall", dir.all()).is_empty());
    }

    #[test]
    fn test_multi_word_prefix() {
        let dir = BuildingDirectory::campus().unwrap();
        let result = filter_buildings("j", dir.all());
        assert_eq!(
            names(&result),
            vec!["J Erik Jonsson Engineering Center", "Jonsson-Rowland Science Center"]
        );
        let result = filter_buildings("jonsson-", dir.all());
        assert_eq!(names(&result), vec!["Jonsson-Rowland Science Center"]);
    }

    #[test]
    fn test_matches_lowercase_definition() {
        let dir = BuildingDirectory::campus().unwrap();
        for q in ["r", "Ru", "rEN", "d", "Mu", "n", "s"] {
            let expected: Vec<&Building> = dir
                .all()
                .iter()
                .filter(|b| b.name.to_lowercase().starts_with(&q.to_lowercase()))
                .collect();
            assert_eq!(filter_buildings(q, dir.all()), expected, "query {q:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let dir = BuildingDirectory::campus().unwrap();
        assert_eq!(filter_buildings("s", dir.all()), filter_buildings("s", dir.all()));
    }

    #[test]
    fn test_custom_fixture() {
        let fixture = vec![
            Building::new("Alpha", true, false),
            Building::new("beta", false, true),
            Building::new("Alphabet", false, false),
        ];
        let result = filter_buildings("ALPHA", &fixture);
        assert_eq!(names(&result), vec!["Alpha", "Alphabet"]);
    }

    #[test]
    fn test_visible_results_hides_empty_query() {
        let dir = BuildingDirectory::campus().unwrap();
        assert!(visible_results("", dir.all()).is_empty());
        assert_eq!(visible_results("f", dir.all()).len(), 1);
    }
}
