use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MaybeCardProps {
    pub acknowledge: Callback<()>,
}

#[function_component]
pub fn MaybeCard(props: &MaybeCardProps) -> Html {
    let ack = {
        let cb = props.acknowledge.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="text-align:center; background:rgba(255,255,255,0.6); padding:32px; border-radius:16px; border:1px solid #fecdd3; box-shadow:0 10px 25px rgba(0,0,0,0.1); max-width:448px; margin:0 auto;">
            <div style="font-size:60px; margin-bottom:16px;">{"\u{1f609}"}</div>
            <h2 style="font-size:30px; color:#e11d48; margin-bottom:16px;">{"Playing hard to get?"}</h2>
            <p style="color:#334155; margin-bottom:24px;">
                {"I respect the hustle. I'll be right here waiting when you're ready to say yes!"}
            </p>
            <button onclick={ack} style="padding:8px 24px; background:#fb7185; color:#fff; border:none; border-radius:9999px; font-weight:600;">
                {"Okay, ask me again!"}
            </button>
        </div>
    }
}
