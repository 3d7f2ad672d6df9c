use leptos::prelude::*;
use leptos_use::use_media_query;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

/// Whether animation should be minimised, and the visitor's stored override.
#[derive(Clone, Copy)]
pub struct MotionSettings {
    pub reduced: Signal<bool>,
    set_override: WriteSignal<Option<bool>>,
}

impl MotionSettings {
    pub fn toggle(&self) {
        self.set_override.set(Some(!self.reduced.get_untracked()));
    }

    /// Back to following the operating system setting.
    pub fn reset(&self) {
        self.set_override.set(None);
    }
}

/// The OS `prefers-reduced-motion` setting, unless the visitor flipped the toggle in the
/// header, which is remembered across visits.
pub fn provide_motion_settings() -> MotionSettings {
    let system = use_media_query("(prefers-reduced-motion: reduce)");

    #[cfg(feature = "hydrate")]
    let (stored, set_override, _) =
        use_local_storage::<Option<bool>, JsonSerdeWasmCodec>("reduce_motion");
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_override) = signal(None::<bool>);

    let reduced = Signal::derive(move || stored.get().unwrap_or_else(|| system.get()));
    let settings = MotionSettings {
        reduced,
        set_override,
    };
    provide_context(settings);
    settings
}

pub fn use_reduced_motion() -> Signal<bool> {
    use_context::<MotionSettings>()
        .map(|m| m.reduced)
        .unwrap_or_else(|| use_media_query("(prefers-reduced-motion: reduce)"))
}

#[component]
pub fn MotionToggle() -> impl IntoView {
    let settings = use_context::<MotionSettings>();
    settings.map(|settings| {
        view! {
            <button
                type="button"
                class="text-muted hover:text-foreground transition-colors duration-200"
                title="Double-click to follow your system setting"
                aria-pressed=move || settings.reduced.get().to_string()
                on:click=move |_| settings.toggle()
                on:dblclick=move |_| settings.reset()
            >
                {move || if settings.reduced.get() { "motion: off" } else { "motion: on" }}
            </button>
        }
    })
}
