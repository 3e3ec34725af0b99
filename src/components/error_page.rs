use crate::util;
use yew::prelude::*;

const DEFAULT_MESSAGE: &str = "We couldn't connect to the database. This usually means the application isn't configured correctly yet.";

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorPageProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component]
pub fn ErrorPage(props: &ErrorPageProps) -> Html {
    let message = props
        .message
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| AttrValue::from(DEFAULT_MESSAGE));
    let retry = Callback::from(|_| util::reload_page());
    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; background:#fff1f2; color:#334155; padding:16px; text-align:center;">
            <div style="background:#fff; padding:32px; border-radius:16px; box-shadow:0 10px 25px rgba(0,0,0,0.1); max-width:448px; width:100%; border:1px solid #ffe4e6;">
                <div style="font-size:60px; margin-bottom:24px;">{"\u{1f494}"}</div>
                <h1 style="font-size:24px; font-weight:bold; color:#e11d48; margin-bottom:16px;">{"Connection Issue"}</h1>
                <p style="margin-bottom:24px; font-size:14px; color:#64748b; line-height:1.6;">{ message }</p>
                <div style="background:#f1f5f9; padding:16px; border-radius:8px; font-size:12px; text-align:left; overflow-x:auto;">
                    <p style="font-family:monospace; color:#64748b; margin-bottom:8px; font-weight:bold;">{"Troubleshooting:"}</p>
                    <ul style="font-family:monospace; color:#475569; margin:0; padding-left:18px; display:flex; flex-direction:column; gap:4px;">
                        <li>{"Check internet connection"}</li>
                        <li>{"Verify FIREBASE_DATABASE_URL"}</li>
                        <li>{"Check browser console for errors"}</li>
                    </ul>
                </div>
                <button onclick={retry} style="margin-top:32px; padding:8px 24px; background:#f43f5e; color:#fff; border:none; border-radius:9999px; font-size:14px; font-weight:600;">{"Try Again"}</button>
            </div>
        </div>
    }
}
