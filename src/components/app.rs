use super::{
    error_page::ErrorPage, loading_screen::LoadingScreen, maybe_card::MaybeCard,
    proposal_card::ProposalCard, success_card::SuccessCard,
};
use crate::model::{Size, ViewState};
use crate::services::{FirebaseConfig, ResponseClient};
use crate::state::{
    BootState, EvasivePlacer, ProposalAction, ProposalStore, activate_decline, boot, submit_accept,
    submit_defer,
};
use crate::util;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let client = use_memo((), |_| ResponseClient::from_config(&FirebaseConfig::from_build_env()));
    let boot_state = use_state(|| BootState::Loading);
    let rerender = use_force_update();
    // Transitions are applied to the store synchronously; the component just
    // re-renders from it.
    let store = use_memo((), move |_| ProposalStore::with_listener(move || rerender.force_update()));
    let rng = use_mut_ref(|| SmallRng::seed_from_u64(util::random_seed()));

    // Connection check before anything interactive is shown
    {
        let client = client.clone();
        let boot_state = boot_state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                boot_state.set(boot(&*client).await);
            });
            || ()
        });
    }

    let on_evade = {
        let store = store.clone();
        let rng = rng.clone();
        Callback::from(move |control: Size| {
            activate_decline(
                &store,
                &EvasivePlacer::default(),
                util::viewport_size(),
                control,
                &mut *rng.borrow_mut(),
            );
        })
    };
    let on_accept = {
        let store = store.clone();
        let client = client.clone();
        Callback::from(move |_| {
            let store = store.clone();
            let client = client.clone();
            spawn_local(async move {
                submit_accept(&store, &*client).await;
            });
        })
    };
    let on_defer = {
        let store = store.clone();
        let client = client.clone();
        Callback::from(move |_| {
            let store = store.clone();
            let client = client.clone();
            spawn_local(async move {
                submit_defer(&store, &*client).await;
            });
        })
    };
    let on_acknowledge = {
        let store = store.clone();
        Callback::from(move |_| {
            store.apply(ProposalAction::Acknowledge);
        })
    };

    match &*boot_state {
        BootState::Loading => return html! { <LoadingScreen /> },
        BootState::Failed(reason) => return html! { <ErrorPage message={AttrValue::from(reason.clone())} /> },
        BootState::Ready => {}
    }
    let local_only = client.is_local_only();
    let proposal = store.current();

    let content = match proposal.view {
        ViewState::Proposal => html! { <ProposalCard
            submitting={proposal.submitting}
            decline_position={proposal.decline_position}
            accept={on_accept}
            defer={on_defer}
            evade={on_evade}
        /> },
        ViewState::Declined => html! { <MaybeCard acknowledge={on_acknowledge} /> },
        ViewState::Success => html! { <SuccessCard attempts={proposal.evasion_count} /> },
    };

    html! {
        <div style="position:relative; width:100%; height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; overflow:hidden; background:linear-gradient(135deg, #fff1f2, #fce7f3);">
            if local_only {
                <div style="position:absolute; top:12px; right:12px; font-size:11px; color:#be123c; background:rgba(255,255,255,0.7); border:1px solid #fecdd3; border-radius:9999px; padding:2px 10px; z-index:10;">
                    {"demo mode: responses are not saved"}
                </div>
            }
            <main style="z-index:10; width:100%; max-width:896px; padding:0 16px; display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:60vh;">
                { content }
            </main>
            <footer style="position:absolute; bottom:16px; color:#f9a8d4; font-size:12px; z-index:10;">
                {"Made with \u{2764}\u{fe0f}"}
            </footer>
        </div>
    }
}
