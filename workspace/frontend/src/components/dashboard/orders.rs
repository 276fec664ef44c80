use std::sync::Arc;

use common::Order;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub orders: Arc<Vec<Order>>,
}

/// Pairs each order with its 1-based row number.
fn numbered(orders: &[Order]) -> impl Iterator<Item = (usize, &Order)> + '_ {
    orders.iter().enumerate().map(|(idx, order)| (idx + 1, order))
}

#[function_component(RecentOrders)]
pub fn recent_orders(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full text-left">
                <thead>
                    <tr class="text-sm text-[#8a756e] border-b">
                        <th class="py-2">{"#"}</th>
                        <th class="py-2">{"Items"}</th>
                        <th class="py-2">{"Date & Time"}</th>
                        <th class="py-2">{"Table Number"}</th>
                        <th class="py-2">{"Price"}</th>
                        <th class="py-2">{"Payment"}</th>
                        <th class="py-2">{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for numbered(&props.orders).map(|(row, order)| html! {
                        <tr key={order.id.clone()} class="text-sm text-[#5e4f4a] border-b last:border-b-0">
                            <td class="py-3">{ row }</td>
                            <td class="py-3 flex items-center gap-3">
                                <div class="w-10 h-10 rounded-md bg-[linear-gradient(135deg,#fff5f2,#f6e7e3)] flex items-center justify-center">{"☕"}</div>
                                <div>
                                    <div class="font-medium">{ &order.name }</div>
                                    <div class="text-xs text-[#9a8883]">{ format!("#{}", order.id) }</div>
                                </div>
                            </td>
                            <td class="py-3">{ &order.date }</td>
                            <td class="py-3">{ &order.table }</td>
                            <td class="py-3 font-medium">{ &order.price }</td>
                            <td class="py-3">{ order.payment.as_str() }</td>
                            <td class="py-3">
                                <button class="px-2 py-1 rounded-md text-sm text-[#8a6f66]">{"•••"}</button>
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
