use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::Config;

/// Static assets, the SPA bundle, and an `index.html` fallback so client
/// routes such as `/About` load the app on a hard refresh.
pub fn configure(cfg: &mut web::ServiceConfig, site: &Config) {
    let index = site.index_file();

    cfg.service(Files::new("/assets", site.assets_dir.clone()))
        .service(
            Files::new("/", site.dist_dir.clone())
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(index).await?;
                        let res = file.into_response(&req);
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use std::fs;
    use std::path::PathBuf;

    fn scratch_site(name: &str) -> Config {
        let root: PathBuf = std::env::temp_dir().join(format!(
            "site-serve-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::create_dir_all(root.join("assets/img")).unwrap();
        fs::write(root.join("dist/index.html"), "<html>app</html>").unwrap();
        fs::write(root.join("dist/ui.js"), "// bundle").unwrap();
        fs::write(root.join("assets/img/about-hero.jpeg"), "jpeg").unwrap();

        Config {
            host: "127.0.0.1".into(),
            port: 0,
            dist_dir: root.join("dist"),
            assets_dir: root.join("assets"),
        }
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let site = scratch_site("fallback");
        let app = test::init_service(App::new().configure(|cfg| configure(cfg, &site))).await;

        for uri in ["/", "/About", "/public-resources/By-Laws"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body = test::call_and_read_body(&app, req).await;
            assert_eq!(&body[..], b"<html>app</html>", "{uri}");
        }
    }

    #[actix_web::test]
    async fn serves_bundle_and_assets() {
        let site = scratch_site("static");
        let app = test::init_service(App::new().configure(|cfg| configure(cfg, &site))).await;

        let req = test::TestRequest::get().uri("/ui.js").to_request();
        assert_eq!(&test::call_and_read_body(&app, req).await[..], b"// bundle");

        let req = test::TestRequest::get()
            .uri("/assets/img/about-hero.jpeg")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
