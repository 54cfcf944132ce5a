use serde::{Deserialize, Serialize};

/// Filters for the activity list endpoint.
///
/// A `None` field stays out of the query string entirely; the service treats
/// a missing key as "no filter", and an explicit empty value would not mean
/// the same thing. `page` and `per_page` are accepted by the service but no
/// UI control drives them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub activity_type: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListFilter {
    /// Build the full filter set from the current value of every filter
    /// control. Derived fresh on each change, so changing one control never
    /// drops the others.
    pub fn from_inputs(search: &str, status: &str, activity_type: &str) -> Self {
        Self {
            search: Self::field(search),
            status: Self::field(status),
            activity_type: Self::field(activity_type),
            page: None,
            per_page: None,
        }
    }

    /// An empty input is an absent key, not an empty-value key.
    pub fn field(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Query pairs in the order the endpoint documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(activity_type) = &self.activity_type {
            pairs.push(("type", activity_type.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_alone_omits_every_other_key() {
        let filter = ListFilter::from_inputs("foo", "", "");
        let pairs = filter.query_pairs();

        assert_eq!(pairs, vec![("search", "foo".to_string())]);
    }

    #[test]
    fn empty_inputs_produce_no_pairs_at_all() {
        let filter = ListFilter::from_inputs("", "", "");
        assert_eq!(filter, ListFilter::default());
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn all_inputs_survive_a_single_change() {
        let filter = ListFilter::from_inputs("hike", "active", "exercise");
        let pairs = filter.query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("search", "hike".to_string()),
                ("status", "active".to_string()),
                ("type", "exercise".to_string()),
            ]
        );
    }

    #[test]
    fn pagination_keys_appear_only_when_set() {
        let filter = ListFilter {
            page: Some(2),
            per_page: Some(15),
            ..ListFilter::default()
        };

        assert_eq!(
            filter.query_pairs(),
            vec![("page", "2".to_string()), ("per_page", "15".to_string())]
        );
    }
}
