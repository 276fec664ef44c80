use yew::prelude::*;
use super::header::Header;
use super::sidebar::Sidebar;
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let page_style = format!(
        "background-color: {}; font-family: Inter, ui-sans-serif, system-ui, -apple-system;",
        theme::BACKGROUND
    );

    html! {
        <div class="min-h-screen bg-[radial-gradient(ellipse_at_top_left,_#fffaf7_0%,_#f3ece8_40%,_#eef6f2_100%)] p-6" style={page_style}>
            <div class="max-w-[1300px] mx-auto bg-[rgba(255,255,255,0.9)] rounded-3xl shadow-xl p-6 grid grid-cols-[260px_1fr] gap-6">
                <Sidebar />
                <main class="flex flex-col gap-6">
                    <Header />
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}
