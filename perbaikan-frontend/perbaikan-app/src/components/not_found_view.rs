use leptos::{html::Div, prelude::*};
use leptos_router::components::A;

use crate::motion::{SignalStage, TargetId};
use crate::surface::{surface_elements, DisplayConfig, SurfaceElement};

const DIGIT_CLASS: &str = "inline-block bg-linear-to-b from-neutral-100 to-neutral-500 bg-clip-text text-[clamp(5rem,18vw,11rem)] font-bold tracking-tighter text-transparent";

const CROSS_PATTERN: &str = "background-image: url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z' fill='%23fff' fill-opacity='1' fill-rule='nonzero'/%3E%3C/g%3E%3C/svg%3E\");";

/// Full screen "404" page. The surface tilts toward the cursor and the content animates in on mount.
///
/// Changing `show_back_link` replays the entrance.
#[component]
pub fn NotFoundView(
    #[prop(into, default = Signal::stored(false))] show_back_link: Signal<bool>,
) -> impl IntoView {
    let config = DisplayConfig::default();
    let stage = SignalStage::new(config.title_words.len(), show_back_link);
    let container = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    animate(container, stage, show_back_link, config.title_words.len());

    let mut digits = Vec::new();
    let mut words = Vec::new();
    let mut description = "";
    let mut back_link = None;
    // build with the link included, whether it shows is decided reactively below
    for (target, element) in surface_elements(&DisplayConfig {
        show_back_link: true,
        ..config
    }) {
        match element {
            SurfaceElement::Digit(digit) => {
                let style = stage.style(target);
                digits.push(view! {
                    <span class=DIGIT_CLASS style=move || style.get()>
                        {digit.to_string()}
                    </span>
                })
            }
            SurfaceElement::TitleWord(word) => {
                let style = stage.style(target);
                words.push(view! {
                    <span class="inline-block" style=move || style.get()>
                        {word}
                    </span>
                })
            }
            SurfaceElement::Description(text) => description = text,
            SurfaceElement::BackLink { href, label } => back_link = Some((href, label)),
            SurfaceElement::Divider => {}
        }
    }
    let divider = stage.transform(TargetId::Divider);
    let description_style = stage.style(TargetId::Description);
    let link_style = stage.style(TargetId::BackLink);
    let tilt = stage.transform(TargetId::TiltSurface);

    view! {
        <div
            node_ref=container
            class="relative flex min-h-screen items-center justify-center overflow-hidden bg-neutral-950 font-sans"
            style="perspective: 1200px;"
        >
            // Background
            <div class="pointer-events-none absolute inset-0 opacity-40" aria-hidden="true">
                <div class="absolute inset-0 bg-[radial-gradient(ellipse_80%_60%_at_50%_0%,var(--tw-gradient-from),transparent)] from-neutral-800/50 to-transparent"></div>
                <div class="absolute inset-0 opacity-[0.02]" style=CROSS_PATTERN></div>
            </div>

            <div
                class="relative flex min-h-screen w-full max-w-3xl flex-col items-center justify-center"
                style=move || {
                    format!("transform-style: preserve-3d; will-change: transform; {}", tilt.get())
                }
            >
                <main class="relative flex min-h-screen w-full flex-col items-center justify-center gap-10 px-6 py-32 text-center">
                    <div class="flex justify-center gap-2 sm:gap-3" aria-hidden="true">
                        {digits}
                    </div>

                    <div
                        class="h-px w-24 origin-left bg-linear-to-r from-neutral-500 to-transparent sm:w-32"
                        style=move || divider.get()
                        aria-hidden="true"
                    ></div>

                    <div class="flex flex-col gap-5">
                        <h1 class="flex flex-wrap justify-center gap-x-2 gap-y-1 text-2xl font-medium tracking-tight text-neutral-100 sm:text-3xl">
                            {words}
                        </h1>
                        <p
                            class="max-w-md text-base leading-relaxed text-neutral-500 sm:text-lg"
                            style=move || description_style.get()
                        >
                            {description}
                        </p>
                    </div>

                    {back_link
                        .map(|(href, label)| {
                            view! {
                                <Show when=move || show_back_link.get()>
                                    <A
                                        href=href
                                        attr:class="group mt-2 flex h-12 items-center justify-center rounded-full border border-neutral-600 bg-neutral-900/80 px-8 text-neutral-200 backdrop-blur-sm transition-colors hover:border-neutral-500 hover:bg-neutral-800 hover:text-white"
                                        attr:style=move || link_style.get()
                                    >
                                        {label}
                                    </A>
                                </Show>
                            }
                        })}
                </main>
            </div>
        </div>
    }
}

/// Wires the pointer listeners, the entrance and the frame loop to `stage`.
/// Everything is released when the owning component is disposed.
#[cfg(feature = "hydrate")]
fn animate(
    container: NodeRef<Div>,
    stage: SignalStage,
    show_back_link: Signal<bool>,
    word_count: usize,
) {
    use std::{cell::RefCell, rc::Rc};

    use leptos::ev::{mouseleave, mousemove};
    use leptos_use::{use_event_listener, use_raf_fn};
    use log::debug;
    use send_wrapper::SendWrapper;

    use crate::entrance::EntranceController;
    use crate::motion::frame_delta;
    use crate::tilt::{Bounds, TiltController};

    let tilt = Rc::new(RefCell::new(TiltController::new()));
    let entrance = Rc::new(RefCell::new(EntranceController::new(word_count)));

    let _ = use_event_listener(container, mousemove, {
        let tilt = SendWrapper::new(Rc::clone(&tilt));
        move |ev| {
            let Some(el) = container.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            tilt.borrow_mut().on_move(
                ev.client_x() as f64,
                ev.client_y() as f64,
                Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                },
            );
        }
    });
    let _ = use_event_listener(container, mouseleave, {
        let tilt = SendWrapper::new(Rc::clone(&tilt));
        move |_| tilt.borrow_mut().on_leave()
    });

    // reruns when the flag changes; `start` tears the previous run down first
    Effect::new({
        let entrance = SendWrapper::new(Rc::clone(&entrance));
        move |_| {
            let show_back_link = show_back_link.get();
            let mut stage = stage;
            entrance.borrow_mut().start(&mut stage, show_back_link);
        }
    });

    let raf = use_raf_fn({
        let tilt = SendWrapper::new(Rc::clone(&tilt));
        let entrance = SendWrapper::new(Rc::clone(&entrance));
        move |args| {
            let delta = frame_delta(args.delta);
            let mut stage = stage;
            entrance.borrow_mut().tick(delta, &mut stage);
            if let Err(e) = tilt.borrow_mut().tick(delta, &mut stage) {
                debug!("tilt skipped a frame: {e}");
            }
        }
    });

    let handles = SendWrapper::new((raf.pause, tilt, entrance));
    on_cleanup(move || {
        let (pause, tilt, entrance) = handles.take();
        pause();
        tilt.borrow_mut().kill();
        let mut stage = stage;
        entrance.borrow_mut().stop(&mut stage);
        debug!("not found view released: {:?}", entrance.borrow().stats());
    });
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos_router::{components::Router, location::RequestUrl};

    use super::*;

    fn render(show_back_link: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new("/"));
            view! {
                <Router>
                    <NotFoundView show_back_link=show_back_link />
                </Router>
            }
            .to_html()
        })
    }

    #[test]
    fn no_link_when_hidden() {
        let html = render(false);
        assert_eq!(html.matches("<a ").count(), 0);
        assert!(!html.contains("Kembali ke Beranda"));
    }

    #[test]
    fn single_link_home_when_shown() {
        let html = render(true);
        assert_eq!(html.matches("<a ").count(), 1);
        assert_eq!(html.matches("href=\"/\"").count(), 1);
        assert_eq!(html.matches("Kembali ke Beranda").count(), 1);
    }
}
