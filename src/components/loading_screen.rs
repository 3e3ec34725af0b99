use yew::prelude::*;

#[function_component]
pub fn LoadingScreen() -> Html {
    html! {
        <div style="height:100vh; width:100%; display:flex; align-items:center; justify-content:center; background:#fff1f2; color:#fb7185;">
            <div style="display:flex; flex-direction:column; align-items:center;">
                <div style="font-size:36px; margin-bottom:16px;">{"\u{2764}\u{fe0f}"}</div>
                <p style="font-size:20px;">{"Preparing something special..."}</p>
            </div>
        </div>
    }
}
