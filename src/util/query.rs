use std::fmt;

/// Ordered query-string parameters passed through to an endpoint untouched.
///
/// Repeated keys are kept (ClickUp filters such as `statuses[]` rely on it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Parse a `key=value` pair as given on the command line. A bare `key`
    /// becomes `key=`.
    pub fn parse_pair(raw: &str) -> Option<(String, String)> {
        let (key, value) = raw.split_once('=').unwrap_or((raw, ""));
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.to_string()))
    }

    /// Append `?k=v&...` to `path`, or return it unchanged when empty.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{self}")
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_leaves_path_alone() {
        assert_eq!(Query::new().append_to("/space/1"), "/space/1");
    }

    #[test]
    fn pairs_keep_order_and_repeats() {
        let q = Query::new()
            .with("archived", "false")
            .with("statuses[]", "open")
            .with("statuses[]", "in progress");
        assert_eq!(
            q.append_to("/list/9/task"),
            "/list/9/task?archived=false&statuses%5B%5D=open&statuses%5B%5D=in%20progress"
        );
    }

    #[test]
    fn parse_pair_variants() {
        assert_eq!(
            Query::parse_pair("archived=true"),
            Some(("archived".into(), "true".into()))
        );
        assert_eq!(
            Query::parse_pair("subtasks"),
            Some(("subtasks".into(), String::new()))
        );
        assert_eq!(Query::parse_pair("a=b=c"), Some(("a".into(), "b=c".into())));
        assert_eq!(Query::parse_pair("=x"), None);
    }

    #[test]
    fn collects_from_tuples() {
        let q: Query = [("page", "0")].into_iter().collect();
        assert_eq!(q.to_string(), "page=0");
    }
}
