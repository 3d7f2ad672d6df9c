use leptos::{html, prelude::*};

use super::{preferences::use_reduced_motion, scroll::use_scroll_progress};
use crate::motion::{
    child_timing, entrance_style, layer_styles, resolve, AssetState, ContentProfile, ContentType,
    Intensity, MotionPreference, OffsetPair, ProfileTable, ProgressDomain, SectionLifecycle,
    SectionPhase, SectionRegistration, VisualState,
};

/// Handed to [`Reveal`] children so they can time their entrance against the section.
#[derive(Clone, Copy)]
struct StaggerContext {
    /// False until the section has run in the browser. Server HTML shows everything.
    armed: ReadSignal<bool>,
    revealed: ReadSignal<bool>,
    reduced: Signal<bool>,
    profile: &'static ContentProfile,
}

fn phase_name(phase: SectionPhase) -> &'static str {
    match phase {
        SectionPhase::Unmounted => "unmounted",
        SectionPhase::Hidden => "hidden",
        SectionPhase::Entering => "entering",
        SectionPhase::Visible => "visible",
    }
}

/// A page section with a scroll-reactive layered background.
///
/// Layers, back to front: solid base colour, optional image (opacity/scale/blur follow
/// scroll), gradient overlay, faint texture, then the children. Children wrapped in
/// [`Reveal`] fade in with a stagger the first time the section comes into view.
#[component]
pub fn ScrollSection(
    #[prop(into)] id: String,
    content: ContentType,
    #[prop(optional)] intensity: Intensity,
    #[prop(optional, into)] image: MaybeProp<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let image = image.get_untracked();
    let registration = SectionRegistration {
        id,
        content_type: content,
        intensity,
    };
    let profile = ProfileTable::builtin().get(registration.content_type);
    let node_ref = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node_ref, OffsetPair::default(), ProgressDomain::Clamped);
    let reduced = use_reduced_motion();

    let lifecycle = StoredValue::new(SectionLifecycle::default());
    let (phase, set_phase) = signal(SectionPhase::Unmounted);
    let (armed, set_armed) = signal(false);
    let (revealed, set_revealed) = signal(false);
    let (asset, set_asset) = signal(AssetState::Loading);
    let img_ref = NodeRef::<html::Img>::new();

    // effects only run in the browser
    Effect::new(move |_| set_armed.set(true));

    let section_id = registration.id.clone();
    Effect::new(move |_| {
        let in_view = progress.get().in_view();
        let update = lifecycle.try_update_value(|l| {
            l.mount();
            let started = l.observe(in_view);
            (started, l.phase(), l.has_entered())
        });
        if let Some((started, next, entered)) = update {
            if started.is_some() {
                log::debug!("section {section_id} entering");
            }
            if entered != revealed.get_untracked() {
                set_revealed.set(entered);
            }
            set_phase.set(next);
        }
    });

    // the image may have finished (or failed) before on:load/on:error were attached
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            let (complete, width) = (img.complete(), img.natural_width());
            set_asset.update(|a| *a = a.settle(complete, width));
        }
    });
    on_cleanup(move || {
        _ = lifecycle.try_update_value(|l| l.unmount());
    });

    let visual = Memo::new(move |_| {
        if reduced.get() {
            VisualState::at_rest(profile, intensity)
        } else {
            resolve(progress.get(), profile, intensity)
        }
    });
    let styles = {
        let image = image.clone();
        Memo::new(move |_| {
            // without a browser there are no load events; let the image show as it arrives
            let current = if armed.get() {
                asset.get()
            } else {
                AssetState::Loaded
            };
            layer_styles(&visual.get(), image.as_deref(), current)
        })
    };

    provide_context(StaggerContext {
        armed,
        revealed,
        reduced,
        profile,
    });

    // rebuild the <img> only when it appears or goes away, not on every frame
    let shows_image = Memo::new(move |_| styles.with(|s| s.image.is_some()));
    let image_layer = move || {
        let src = image.clone()?;
        shows_image.get().then(|| view! {
            <img
                node_ref=img_ref
                src=src
                alt=""
                class="absolute inset-0 w-full h-full object-cover origin-center will-change-transform"
                style=move || styles.with(|s| s.image.clone().unwrap_or_default())
                on:load=move |_| set_asset.update(|a| *a = a.on_load())
                on:error=move |_| {
                    log::debug!("section background failed to load, using solid fallback");
                    set_asset.update(|a| *a = a.on_error());
                }
            />
        })
    };

    view! {
        <section
            node_ref=node_ref
            id=registration.id.clone()
            class=format!("relative isolate overflow-hidden {class}")
            data-content=registration.content_type.as_str()
            data-intensity=registration.intensity.as_str()
            data-phase=move || phase_name(phase.get())
        >
            <div
                aria-hidden="true"
                class="absolute inset-0 -z-10 pointer-events-none"
                style=move || styles.with(|s| s.base.clone())
            >
                {image_layer}
                <div
                    class="absolute inset-0 bg-gradient-to-b from-background/10 via-background/60 to-background"
                    style=move || styles.with(|s| s.gradient.clone())
                ></div>
                <div
                    class="absolute inset-0 section-texture"
                    style=move || styles.with(|s| s.texture.clone())
                ></div>
            </div>
            <div class="relative">{children()}</div>
        </section>
    }
}

/// One staggered child of a [`ScrollSection`]. Outside a section it renders as a plain
/// wrapper with no animation.
#[component]
pub fn Reveal(
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<StaggerContext>();
    let style = move || {
        ctx.map(|ctx| {
            let pref = MotionPreference::from_reduced(ctx.reduced.get());
            let timing = child_timing(index, ctx.profile, pref);
            let shown = !ctx.armed.get() || ctx.revealed.get();
            entrance_style(timing, ctx.profile, shown, pref)
        })
        .unwrap_or_default()
    };
    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_section() -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <ScrollSection id="s" content=ContentType::Hero image="/img/hero.svg">
                    <Reveal index=0>"hello"</Reveal>
                    <Reveal index=3>"world"</Reveal>
                </ScrollSection>
            }
            .to_html()
        })
    }

    #[test]
    fn test_server_html_shows_content() {
        let html = render_section();
        assert!(html.contains("hello") && html.contains("world"));
        assert!(html.contains("opacity: 1; transform: translateY(0px);"));
        assert!(!html.contains("translateY(24px)"));
    }

    #[test]
    fn test_server_html_shows_image_layer() {
        let html = render_section();
        assert!(html.contains("/img/hero.svg"));
        assert!(!html.contains("opacity: 0.000; transform: scale"));
        assert!(html.contains(r#"data-content="hero""#));
    }
}
