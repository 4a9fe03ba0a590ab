use crate::SurfaceQuery;
/// User-interface rendering for the minimal-surface generator.
use axum::extract::{OriginalUri, Query};

use maud::{html, Markup, DOCTYPE};

/// Render the user interface.
pub async fn interface(uri: OriginalUri, Query(query): Query<SurfaceQuery>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            title { "Minimal Surfaces" }
            link rel="stylesheet" href="static/style.css";
            script src="static/app.js" async {}
        }
        body {
            (interface_body(uri.query().unwrap_or(""), &query))
        }
    }
}

fn interface_body(query_str: &str, query: &SurfaceQuery) -> Markup {
    html! {
        form id="form-surface" action="/" autocomplete="off" class="parameters" {
            h2 { "Surface" }
            p {
                label { "Family:" }
                select id="input-surface" name="surface" {
                    @for surface in ms_core::surface_types() {
                        option value=(surface) selected[query.surface == *surface] { (surface) }
                    }
                }
                " "

                label { "Resolution (samples per axis):" }
                input id="input-res" name="res" type="number" min="2" value=(query.res);
                " "
            }
            h2 { "Family settings" }
            p {
                label { "Enneper order:" }
                input id="input-order" name="order" type="number" min="1" value=(query.order);
                " "

                label { "Execution:" }
                select id="input-parallel" name="parallel" {
                    option value="true" selected[query.parallel] { "parallel" }
                    option value="false" selected[!query.parallel] { "sequential" }
                }
                " "

                label { "Workers:" }
                input id="input-workers" name="workers" type="number" min="1" value=(query.workers);
                " "

                label { "Colormap:" }
                select id="input-colormap" name="colormap" {
                    @for name in ms_core::image::Colormap::names() {
                        option value=(name) selected[query.colormap == *name] { (name) }
                    }
                }
                " "
                br;
            }
            input text="Go" type="submit";
        }
        p {
            a href="/" { "Reset" }
        }

        div {
            h2 { "Rendering" }
            p { (format!("Parameters: {:?}", query)) }

            (render_pane(query_str, &query.surface, query.res))

            p {
                "Coordinate grids: "
                a href=(format!("/surface/{}?{}", query.surface, query_str)) { "JSON" }
            }
        }
    }
}

fn render_pane(query_str: &str, surface: &str, size: usize) -> Markup {
    html! {
        div class="render-pane" {
            h3 { (surface) }
            img src=(format!("/render/{}?{}", surface, query_str)) width=(size) height=(size) class="img-surface";
        }
    }
}
