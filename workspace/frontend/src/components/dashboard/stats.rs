use common::format::{format_count, format_dollars};
use yew::prelude::*;
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub total_orders: u64,
    pub new_customers: u64,
    pub total_sales: u64,
}

#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-3 gap-4">
            <KpiCard title="Total Order" change="-2.33%" value={format_count(props.total_orders)} progress={60} />
            <KpiCard title="New Customer" change="+32.40%" value={format_count(props.new_customers)} progress={40} />
            <KpiCard title="Total Sales" change="+25%" value={format_dollars(props.total_sales)} progress={70} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct KpiCardProps {
    title: AttrValue,
    /// Period-over-period change, e.g. "+25%"; a leading '-' renders red
    change: AttrValue,
    value: String,
    /// Width of the progress bar in percent
    progress: u8,
}

#[function_component(KpiCard)]
fn kpi_card(props: &KpiCardProps) -> Html {
    let change_class = if props.change.starts_with('-') { "text-red-500" } else { "text-green-500" };
    let bar_style = format!("width: {}%; background-color: {};", props.progress.min(100), theme::ACCENT);

    html! {
        <div class="rounded-xl p-4 bg-[rgba(255,255,255,0.8)] shadow-inner">
            <div class="text-xs text-[#8a756e]">
                { props.title.clone() }{" "}
                <span class={classes!("text-sm", change_class)}>{ props.change.clone() }</span>
            </div>
            <div class="text-3xl font-bold text-[#3f2f2a]">{ &props.value }</div>
            <div class="h-2 bg-[rgba(199,122,103,0.15)] rounded-full mt-3">
                <div class="h-full rounded-full" style={bar_style}></div>
            </div>
        </div>
    }
}
