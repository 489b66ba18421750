//! Local preview: serves the site root as static files. The page still
//! renders itself in the browser.

use std::path::Path;

use rocket::fs::FileServer;
use rocket::response::content::RawHtml;
use rocket::{catch, catchers};

use crate::config::ServeConfig;
use crate::error::{FolioError, Result};

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

pub fn build(config: &ServeConfig) -> Result<rocket::Rocket<rocket::Build>> {
    let root = Path::new(&config.root);
    if !root.is_dir() {
        return Err(FolioError::Config(format!(
            "Site root {} is not a directory",
            root.display()
        )));
    }
    if !root.join("index.html").exists() {
        log::warn!("No index.html under {}", root.display());
    }

    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port));

    Ok(rocket::custom(figment)
        .mount("/", FileServer::from(root))
        .register("/", catchers![not_found]))
}

pub async fn run(config: ServeConfig) -> Result<()> {
    let server = build(&config)?;
    log::info!("Serving {} at http://{}:{}", config.root, config.address, config.port);
    server
        .launch()
        .await
        .map_err(|e| FolioError::Http(format!("preview server failed: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;
    use rocket::local::blocking::Client;

    #[test]
    fn serves_site_files_and_404s_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets/data")).unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        std::fs::write(dir.path().join("assets/data/links.json"), "[]").unwrap();

        let config = ServeConfig {
            root: dir.path().to_string_lossy().into_owned(),
            ..ServeConfig::default()
        };
        let client = Client::tracked(build(&config).unwrap()).unwrap();

        let resp = client.get("/assets/data/links.json").dispatch();
        assert_eq!(resp.status(), Status::Ok);
        assert_eq!(resp.into_string().as_deref(), Some("[]"));

        assert_eq!(client.get("/").dispatch().status(), Status::Ok);
        assert_eq!(client.get("/missing.json").dispatch().status(), Status::NotFound);
    }

    #[test]
    fn missing_root_is_rejected() {
        let config = ServeConfig {
            root: "/definitely/not/here".into(),
            ..ServeConfig::default()
        };
        assert!(build(&config).is_err());
    }
}
