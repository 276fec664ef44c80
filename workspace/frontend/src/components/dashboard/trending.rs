use std::sync::Arc;

use common::TrendingItem;
use yew::prelude::*;
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub items: Arc<Vec<TrendingItem>>,
}

#[function_component(TrendingList)]
pub fn trending_list(props: &Props) -> Html {
    let icon_style = format!("background-color: {};", theme::CARD);

    html! {
        <ul class="flex-1 divide-y">
            { for props.items.iter().map(|item| html! {
                <li key={item.id} class="py-3 flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-md bg-[linear-gradient(135deg,#fff5f2,#f6e7e3)] flex items-center justify-center text-sm" style={icon_style.clone()}>
                            <span role="img" aria-label="coffee">{"☕"}</span>
                        </div>
                        <div>
                            <div class="font-medium text-[#433530]">{ &item.name }</div>
                            <div class="text-xs text-[#9a8883]">{ &item.price }</div>
                        </div>
                    </div>
                    <div class="text-sm font-medium text-[#4f3f3a]">{ item.qty }</div>
                </li>
            })}
        </ul>
    }
}
