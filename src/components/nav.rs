use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::hooks::auto_scroll::use_auto_scroll;
use crate::hooks::keyboard::use_escape_key;
use crate::hooks::media::use_media_query;
use crate::hooks::scroll::use_scroll_state;
use crate::Route;

const LINKS: [(Route, &str); 5] = [
    (Route::Services, "Services"),
    (Route::Products, "Products"),
    (Route::Blog, "Blog"),
    (Route::Museum, "Museum"),
    (Route::Contact, "Contact"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_scroll_state();
    let is_mobile = use_media_query(config::MOBILE_QUERY);
    let tour = use_auto_scroll(config::AUTO_SCROLL_SPEED_PX_PER_SEC);

    let is_scrolled = scroll.scroll_offset > config::NAV_SCROLLED_OFFSET;

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    use_escape_key(close_menu.clone(), *menu_open);

    // Leaving the breakpoint with the menu open would leave it stuck open.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |is_mobile| {
                if !*is_mobile {
                    menu_open.set(false);
                }
                || ()
            },
            is_mobile,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_tour = {
        let toggle = tour.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle.emit(());
        })
    };

    let menu_class = if is_mobile && *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                if is_mobile {
                    <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                }
                <div class={menu_class}>
                    { for LINKS.iter().map(|(route, label)| {
                        let close_menu = close_menu.clone();
                        html! {
                            <div onclick={Callback::from(move |_: MouseEvent| close_menu.emit(()))}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    })}
                    <button
                        class={classes!("nav-tour-button", tour.running.then(|| "running"))}
                        onclick={toggle_tour}
                    >
                        { if tour.running { "❚❚ Pause" } else { "▶ Tour" } }
                    </button>
                </div>
            </div>
        </nav>
    }
}
