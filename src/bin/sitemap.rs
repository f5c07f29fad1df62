use paravela_site::{
    catalog::Catalog,
    sitemap::{render, DEFAULT_SITE_URL},
};
use std::fs;

fn main() {
    let catalog = Catalog::load().expect("Should be able to load the project catalog");
    let base_url = std::env::var("PARAVELA_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
    fs::write("public/sitemap.xml", render(&base_url, &catalog))
        .expect("Should be able to write sitemap");
    println!("wrote {} routes to public/sitemap.xml", catalog.len() + 1);
}
