use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::ProductCard;
use crate::components::footer::Footer;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::use_site_content;
use crate::hooks::scroll::use_scroll_to_top;
use crate::pages::not_found::NotFound;
use crate::reveal::trigger::TriggerOptions;
use crate::Route;

#[function_component(Products)]
pub fn products() -> Html {
    use_title(config::page_title("Products"));
    use_scroll_to_top();
    let content = use_site_content();

    html! {
        <div class="products-page">
            <section class="page-hero">
                <h1>{"Products"}</h1>
                <p>{"Things we built for ourselves first, then kept polishing."}</p>
            </section>
            <section class="card-grid">
                { for content.products.iter().map(|product| html! {
                    <Reveal key={product.slug.clone()} options={TriggerOptions::once(0.2)}>
                        <ProductCard product={product.clone()} />
                    </Reveal>
                })}
            </section>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    pub slug: String,
}

#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    let content = use_site_content();
    let name = content.product(&props.slug).map(|p| p.name.clone()).unwrap_or_default();
    use_title(config::page_title(&name));
    use_scroll_to_top();

    let Some(product) = content.product(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="product-page">
            <section class="page-hero">
                <h1>{&product.name}</h1>
                <p class="tagline">{&product.tagline}</p>
            </section>
            <Reveal class="product-body" options={TriggerOptions::once(0.1)}>
                <p>{&product.description}</p>
                <ul class="feature-list">
                    { for product.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                </ul>
                <Link<Route> to={Route::Products} classes="forward-link">
                    {"← All products"}
                </Link<Route>>
            </Reveal>
            <Footer />
        </div>
    }
}
