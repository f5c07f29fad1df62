use crate::catalog::Catalog;

pub const DEFAULT_SITE_URL: &str = "https://paravela.work";

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Every route the site serves: the gallery plus one page per catalog slug.
pub fn routes(catalog: &Catalog) -> Vec<String> {
    std::iter::once("/".to_string())
        .chain(catalog.projects().iter().map(|p| p.href()))
        .collect()
}

pub fn render(base_url: &str, catalog: &Catalog) -> String {
    let base = base_url.trim_end_matches('/');
    let urls = routes(catalog)
        .into_iter()
        .map(|route| format!("  <url><loc>{}</loc></url>\n", escape(&format!("{base}{route}"))))
        .collect::<String>();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_routes_cover_every_slug() {
        let catalog = Catalog::load().unwrap();
        let routes = routes(&catalog);
        assert_eq!(routes.len(), catalog.len() + 1);
        assert_eq!(routes[0], "/");
        for slug in catalog.slugs() {
            assert!(routes.contains(&format!("/projects/{slug}")));
        }
    }

    #[test]
    fn test_render() {
        let catalog = Catalog::from_json(
            r#"[{"id": "1", "slug": "a&b", "title": "A", "category": "c", "color": "bg-[#000]", "image": "/a.jpg"}]"#,
        )
        .unwrap();
        let xml = render("https://example.com/", &catalog);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/projects/a&amp;b</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
