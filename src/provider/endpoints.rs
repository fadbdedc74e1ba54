use url::Url;

/// Appends path segments to `base`, percent-encoding each one.
///
/// Returns `None` for cannot-be-a-base URLs such as `mailto:`.
fn build_provider_url(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url)
}

/// Management API routes relative to a configurable base URL.
#[derive(Debug, Clone)]
pub(crate) struct ProviderEndpoints {
    base: Url,
}

impl ProviderEndpoints {
    pub(crate) fn new(base: Url) -> Option<Self> {
        if base.cannot_be_a_base() {
            return None;
        }
        Some(Self { base })
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    /// `/v1/projects/{projectId}/databases`
    pub(crate) fn project_databases(&self, project_id: &str) -> Url {
        self.join(&["v1", "projects", project_id, "databases"])
    }

    /// `/v1/databases/{databaseId}/connections`
    pub(crate) fn database_connections(&self, database_id: &str) -> Url {
        self.join(&["v1", "databases", database_id, "connections"])
    }

    fn join(&self, segments: &[&str]) -> Url {
        // `new` rejects cannot-be-a-base URLs, so building cannot fail here.
        build_provider_url(&self.base, segments).unwrap_or_else(|| self.base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(base: &str) -> ProviderEndpoints {
        ProviderEndpoints::new(Url::parse(base).expect("valid base url")).expect("base url")
    }

    #[test]
    fn builds_project_and_connection_routes() {
        let e = endpoints("https://api.prisma.io");

        assert_eq!(
            e.project_databases("proj_1").as_str(),
            "https://api.prisma.io/v1/projects/proj_1/databases"
        );
        assert_eq!(
            e.database_connections("db_9").as_str(),
            "https://api.prisma.io/v1/databases/db_9/connections"
        );
    }

    #[test]
    fn keeps_base_path_prefix_and_drops_query() {
        let e = endpoints("http://127.0.0.1:8080/proxy/?trace=1");

        assert_eq!(
            e.project_databases("p").as_str(),
            "http://127.0.0.1:8080/proxy/v1/projects/p/databases"
        );
    }

    #[test]
    fn percent_encodes_ids() {
        let e = endpoints("https://api.prisma.io");

        assert_eq!(
            e.project_databases("a/b c").as_str(),
            "https://api.prisma.io/v1/projects/a%2Fb%20c/databases"
        );
    }

    #[test]
    fn rejects_cannot_be_a_base_urls() {
        let url = Url::parse("mailto:ops@example.com").expect("valid url");
        assert!(ProviderEndpoints::new(url).is_none());
    }
}
