use crate::model::{Position, Size};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProposalCardProps {
    pub submitting: bool,
    /// Where the decline control currently sits, once it has moved at least once.
    pub decline_position: Option<Position>,
    pub accept: Callback<()>,
    pub defer: Callback<()>,
    /// Decline control hovered or clicked; carries its measured size.
    pub evade: Callback<Size>,
}

fn decline_style(position: Option<Position>) -> String {
    const BASE: &str = "padding:12px 32px; background:#cbd5e1; color:#334155; font-weight:600; font-size:18px; border:none; border-radius:9999px; z-index:20; cursor:default;";
    match position {
        Some(p) => format!(
            "{BASE} position:fixed; top:{:.1}px; left:{:.1}px; transition:top 0.2s ease-out, left 0.2s ease-out;",
            p.top, p.left
        ),
        None => BASE.to_string(),
    }
}

#[function_component]
pub fn ProposalCard(props: &ProposalCardProps) -> Html {
    let decline_ref = use_node_ref();

    // Same handler for hover and click: a fast pointer can click before the
    // hover-driven move lands.
    let evade = {
        let decline_ref = decline_ref.clone();
        let cb = props.evade.clone();
        Callback::from(move |_: MouseEvent| {
            let size = decline_ref
                .cast::<Element>()
                .map(|el| {
                    let rect = el.get_bounding_client_rect();
                    Size::new(rect.width(), rect.height())
                })
                .unwrap_or(Size::new(0.0, 0.0));
            cb.emit(size);
        })
    };
    let accept = {
        let cb = props.accept.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let defer = {
        let cb = props.defer.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="position:relative; text-align:center;">
            <h1 style="font-size:56px; color:#e11d48; margin-bottom:32px;">{"Will you go on a date with me?"}</h1>
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; gap:24px; margin-top:48px; min-height:100px;">
                <div style="display:flex; flex-wrap:wrap; gap:32px; align-items:center; justify-content:center;">
                    <button
                        onclick={accept}
                        disabled={props.submitting}
                        style="padding:12px 32px; background:#f43f5e; color:#fff; font-weight:bold; font-size:20px; border:none; border-radius:9999px; z-index:20;"
                    >
                        { if props.submitting { "Processing..." } else { "Yes, absolutely! \u{1f496}" } }
                    </button>
                    <button
                        ref={decline_ref}
                        onmouseenter={evade.clone()}
                        onclick={evade}
                        style={decline_style(props.decline_position)}
                    >
                        {"No way"}
                    </button>
                </div>
                <button
                    onclick={defer}
                    disabled={props.submitting}
                    style="margin-top:24px; padding:8px 24px; background:rgba(255,255,255,0.5); border:1px solid #fecdd3; color:#f43f5e; font-size:14px; border-radius:9999px;"
                >
                    {"Maybe Later? \u{1f570}\u{fe0f}"}
                </button>
            </div>
            <p style="margin-top:32px; color:#fb7185; font-size:14px; font-style:italic; opacity:0.8;">
                {"(Psst... the 'No' button is feeling a bit shy today)"}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decline_stays_in_flow_until_moved() {
        assert!(!decline_style(None).contains("position:fixed"));
    }

    #[test]
    fn decline_pins_to_position_after_move() {
        let s = decline_style(Some(Position { top: 120.25, left: 64.0 }));
        assert!(s.contains("position:fixed"));
        assert!(s.contains("top:120.2px") || s.contains("top:120.3px"));
        assert!(s.contains("left:64.0px"));
    }
}
