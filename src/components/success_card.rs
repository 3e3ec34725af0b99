use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SuccessCardProps {
    pub attempts: u32,
}

#[function_component]
pub fn SuccessCard(props: &SuccessCardProps) -> Html {
    let chase_note = if props.attempts > 0 {
        html! {
            <div style="background:rgba(255,255,255,0.5); padding:16px; border-radius:12px; display:inline-block; border:1px solid #ffe4e6;">
                <p style="color:#f43f5e; font-size:14px; margin:0;">
                    {"I saw you tried to catch that \"No\" button "}
                    <span style="font-weight:bold; font-size:18px; margin:0 4px;">{ props.attempts.to_string() }</span>
                    { if props.attempts == 1 { "time! \u{1f609}" } else { "times! \u{1f609}" } }
                    <br />
                    {"Good thing it was hard to get!"}
                </p>
            </div>
        }
    } else {
        html! {}
    };
    html! {
        <div style="text-align:center;">
            <div style="margin-bottom:24px; display:flex; justify-content:center;">
                <svg style="width:128px; height:128px; color:#f43f5e;" fill="currentColor" viewBox="0 0 24 24">
                    <path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z" />
                </svg>
            </div>
            <h1 style="font-size:56px; color:#e11d48; margin-bottom:24px;">{"Thank You!"}</h1>
            <p style="font-size:24px; color:#334155; font-weight:300; margin:0 auto 32px auto; max-width:512px; line-height:1.6;">
                {"I'm so happy you said yes! Get ready for an amazing time."}
            </p>
            { chase_note }
        </div>
    }
}
