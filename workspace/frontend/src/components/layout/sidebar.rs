use yew::prelude::*;
use crate::theme;

/// Navigation entries as `(label, Font Awesome icon class)`.
const NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "fas fa-home"),
    ("Shoping", "fas fa-shopping-cart"),
    ("Order List", "fas fa-list"),
    ("Favorite", "fas fa-heart"),
    ("Payment", "fas fa-credit-card"),
    ("Settings", "fas fa-cog"),
];

const NAV_BUTTON: &str = "flex items-center gap-3 px-3 py-2 rounded-lg text-sm text-[#6b5851] hover:bg-[rgba(199,122,103,0.06)]";

// Buttons are placeholders; routing, settings and logout live elsewhere.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <aside class="flex flex-col gap-6 pr-2">
            <div class="flex items-center gap-3">
                <div
                    class="w-10 h-10 rounded-lg bg-[linear-gradient(135deg,#f0dcd6,#fceeea)] flex items-center justify-center font-bold text-lg"
                    style={format!("color: {};", theme::ACCENT_DARK)}
                >
                    {"N"}
                </div>
                <div class="text-lg font-semibold text-[#6b4f47]">{"Nogops"}</div>
            </div>

            <nav class="flex-1 flex flex-col gap-2">
                { for NAV_ITEMS.iter().map(|(name, icon)| html! {
                    <button key={*name} class={NAV_BUTTON}>
                        <span class="text-lg"><i class={*icon}></i></span>
                        {*name}
                    </button>
                })}
            </nav>

            <div class="mt-auto">
                <button class={NAV_BUTTON}>
                    <i class="fas fa-sign-out-alt"></i>
                    <span>{"Log Out"}</span>
                </button>
            </div>
        </aside>
    }
}
