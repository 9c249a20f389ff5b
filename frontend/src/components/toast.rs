use wtp_shared::notification::Notification;
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::toast as t;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
    pub on_close: Callback<()>,
    pub duration_ms: u32,
}

/// Fixed-position notification. Closes itself after `duration_ms`; a new
/// notification (different id) restarts the timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let auto_timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), props.duration_ms)
    };

    {
        let auto_timeout = auto_timeout.clone();
        let id = props.notification.as_ref().map(|notification| notification.id);
        use_effect_with(id, move |id| {
            if id.is_some() {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    let Some(notification) = props.notification.as_ref() else {
        return Html::default();
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed", "top-20", "right-4", "z-50", "flex", "items-start", "gap-3",
                "max-w-sm", "rounded-lg", "px-4", "py-3", "text-white", "shadow-xl",
                notification.kind.css_class()
            )}
            role={if notification.is_error() { "alert" } else { "status" }}
            aria-live="polite"
        >
            <p class="flex-1 text-sm">{ &notification.message }</p>
            <button
                type="button"
                class="text-lg leading-none opacity-80 hover:opacity-100"
                aria-label={t::CLOSE_ARIA}
                onclick={close}
            >
                {"×"}
            </button>
        </div>
    }
}
