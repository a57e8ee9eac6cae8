use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Metric, Product, Service};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    #[prop_or_default]
    pub detailed: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="card service-card">
            <span class="card-icon">{&service.icon}</span>
            <h3>{&service.title}</h3>
            <p>{&service.summary}</p>
            if props.detailed && !service.points.is_empty() {
                <ul class="feature-list">
                    { for service.points.iter().map(|point| html! { <li>{point}</li> }) }
                </ul>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub metric: Metric,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="metric">
            <span class="metric-value">{&props.metric.value}</span>
            <span class="metric-label">{&props.metric.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    html! {
        <Link<Route> to={Route::Product { slug: product.slug.clone() }} classes="card product-card">
            <h3>{&product.name}</h3>
            <p class="tagline">{&product.tagline}</p>
        </Link<Route>>
    }
}
