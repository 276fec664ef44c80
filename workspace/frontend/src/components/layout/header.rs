use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="flex items-center justify-between">
            <div>
                <h1 class="text-2xl font-semibold text-[#4f3f3a]">{"Welcome to Nogops"}</h1>
                <p class="text-sm text-[#8c7b76]">{"Choose The Category"}</p>
            </div>

            <div class="flex items-center gap-4">
                <div class="relative">
                    <input
                        type="search"
                        placeholder="Search something"
                        class="pl-10 pr-4 py-2 rounded-full w-80 shadow-sm border border-transparent focus:border-transparent focus:outline-none"
                    />
                    <i class="fas fa-search absolute left-3 top-2.5 text-[#9a8985]"></i>
                </div>

                <i class="fas fa-bell text-[#8a7671] text-xl"></i>

                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full bg-[linear-gradient(135deg,#f0dcd6,#fceeea)] flex items-center justify-center">
                        <i class="fas fa-user text-[#6b4f47]"></i>
                    </div>
                    <div class="text-right">
                        <div class="text-xs text-[#8a756e]">{"Admin"}</div>
                        <div class="text-sm font-medium text-[#5a443d]">{"Sheilla Poetri"}</div>
                    </div>
                </div>
            </div>
        </header>
    }
}
