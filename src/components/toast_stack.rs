//! Toast Stack Component
//!
//! Transient notifications from the app context.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.notices.get().notices().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
