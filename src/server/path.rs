/// Named path segments captured while matching a request path against a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Gets the value captured for the given parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, value)| value.as_str())
    }

    /// Iterates over the captured parameters in the order they appear in the template.
    pub fn iter(&self) -> impl Iterator<Item=(&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// ":name"
    Param(String),
}

/// A route path such as "/users/:id/posts". Segments are either literals or named parameters.
/// Empty segments are ignored, so "/a/b" and "/a/b/" are the same template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> PathTemplate {
        let segments = split_segments(template)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string())
            })
            .collect();
        PathTemplate { segments }
    }

    /// Creates the template of a mounted route: this template followed by the given one.
    pub fn join(&self, other: &PathTemplate) -> PathTemplate {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        PathTemplate { segments }
    }

    /// Matches a decoded request path against this template.
    /// Segments are aligned from the end of the path, so each parameter is found by its distance from the end.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut remaining = split_segments(path).rev();
        let mut params = vec![];

        for segment in self.segments.iter().rev() {
            let actual = remaining.next()?;
            match segment {
                Segment::Literal(literal) if literal == actual => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push((name.clone(), actual.to_string())),
            }
        }

        if remaining.next().is_some() {
            return None;
        }

        params.reverse();
        Some(Params(params))
    }
}

fn split_segments(path: &str) -> impl DoubleEndedIterator<Item=&str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use crate::server::path::PathTemplate;

    #[test]
    fn literal() {
        let template = PathTemplate::parse("/hello/world");
        assert!(template.matches("/hello/world").unwrap().is_empty());
        assert!(template.matches("/hello/world/").is_some());
        assert!(template.matches("/hello").is_none());
        assert!(template.matches("/hello/world/again").is_none());
        assert!(template.matches("/hello/there").is_none());
    }

    #[test]
    fn root() {
        let template = PathTemplate::parse("/");
        assert!(template.matches("/").is_some());
        assert!(template.matches("").is_some());
        assert!(template.matches("/a").is_none());
    }

    #[test]
    fn params() {
        let template = PathTemplate::parse("/users/:id/posts/:post");
        let params = template.matches("/users/42/posts/hello-world").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("post"), Some("hello-world"));
        assert_eq!(params.get("other"), None);
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("id", "42"), ("post", "hello-world")]);
    }

    #[test]
    fn params_aligned_from_end() {
        let template = PathTemplate::parse("/files/:name");
        assert!(template.matches("/files/a/b").is_none());
        assert!(template.matches("/other/a").is_none());
        assert_eq!(template.matches("/files/a").unwrap().get("name"), Some("a"));
    }

    #[test]
    fn case_sensitive() {
        assert!(PathTemplate::parse("/About").matches("/about").is_none());
    }

    #[test]
    fn join() {
        let template = PathTemplate::parse("/api/:version").join(&PathTemplate::parse("/users/:id"));
        assert_eq!(template, PathTemplate::parse("/api/:version/users/:id"));
        let params = template.matches("/api/v1/users/7").unwrap();
        assert_eq!(params.get("version"), Some("v1"));
        assert_eq!(params.get("id"), Some("7"));
    }
}
