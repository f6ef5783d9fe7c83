//! LC/NC Database Pricing Site
//!
//! A Leptos SSR host for the pricing page.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> lcnc_www::SiteResult<()> {
    use axum::Router;
    use leptos::get_configuration;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing::{error, info};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use lcnc_www::app::App;
    use lcnc_www::catalog;
    use lcnc_www::config::SiteConfig;
    use lcnc_www::fileserv::file_and_error_handler;
    use lcnc_www::SiteError;

    let config = SiteConfig::default();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = catalog::validate() {
        error!("Pricing catalog is malformed: {}", e);
        return Err(e.into());
    }
    info!(
        plans = catalog::PLANS.len(),
        add_ons = catalog::ADD_ONS.len(),
        faqs = catalog::FAQS.len(),
        "Pricing catalog loaded"
    );

    let conf = get_configuration(None)
        .await
        .map_err(|e| SiteError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Pricing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser bundle starts from `lcnc_www::hydrate`.
}
