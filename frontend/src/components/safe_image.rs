use log::debug;
use yew::prelude::*;

/// Appended once to a reference that failed to load without it.
pub const FALLBACK_EXTENSION: &str = ".png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackStage {
    Primary,
    ExtensionRetried,
    FallbackApplied,
    Exhausted,
}

/// What an image element is currently showing and how far down the
/// fallback chain it has gone.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    primary: AttrValue,
    fallback: Option<AttrValue>,
    current: AttrValue,
    stage: FallbackStage,
}

impl ImageSource {
    pub fn new(primary: AttrValue, fallback: Option<AttrValue>) -> Self {
        Self {
            current: primary.clone(),
            primary,
            fallback,
            stage: FallbackStage::Primary,
        }
    }

    pub fn current(&self) -> &AttrValue {
        &self.current
    }

    pub fn stage(&self) -> FallbackStage {
        self.stage
    }

    pub fn opacity(&self) -> u8 {
        match self.stage() {
            FallbackStage::Exhausted => 0,
            _ => 1,
        }
    }

    /// True when built for these props; otherwise the state belongs to an
    /// older reference and must be thrown away.
    pub fn matches(&self, primary: &AttrValue, fallback: &Option<AttrValue>) -> bool {
        &self.primary == primary && &self.fallback == fallback
    }

    /// This state if it was built for these props, a fresh one otherwise.
    pub fn rebased(&self, primary: &AttrValue, fallback: &Option<AttrValue>) -> Self {
        if self.matches(primary, fallback) {
            self.clone()
        } else {
            Self::new(primary.clone(), fallback.clone())
        }
    }

    /// Advances one step after a load error. Returns whether anything changed.
    pub fn record_failure(&mut self) -> bool {
        let next = match self.stage {
            FallbackStage::Primary if self.can_append_extension() => {
                self.current = format!("{}{}", &*self.current, FALLBACK_EXTENSION).into();
                FallbackStage::ExtensionRetried
            }
            FallbackStage::Primary | FallbackStage::ExtensionRetried => match self.usable_fallback() {
                Some(fallback) => {
                    self.current = fallback;
                    FallbackStage::FallbackApplied
                }
                None => FallbackStage::Exhausted,
            },
            FallbackStage::FallbackApplied | FallbackStage::Exhausted => FallbackStage::Exhausted,
        };
        let changed = next != self.stage;
        if changed {
            debug!("image {} -> {:?} ({})", &*self.primary, next, &*self.current);
        }
        self.stage = next;
        changed
    }

    fn can_append_extension(&self) -> bool {
        !self.current.is_empty() && !self.current.ends_with(FALLBACK_EXTENSION)
    }

    fn usable_fallback(&self) -> Option<AttrValue> {
        self.fallback
            .as_ref()
            .filter(|fallback| !fallback.is_empty() && **fallback != self.current)
            .cloned()
    }
}

#[derive(Properties, PartialEq)]
pub struct SafeImageProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub fallback_src: Option<AttrValue>,
}

/// `<img>` that walks the fallback chain on load errors instead of showing a
/// broken image. Once nothing is left it stays in the layout, transparent.
#[function_component(SafeImage)]
pub fn safe_image(props: &SafeImageProps) -> Html {
    let source = use_state_eq(|| ImageSource::new(props.src.clone(), props.fallback_src.clone()));
    // Stored state lags one render behind a prop change; never show it stale.
    let shown = source.rebased(&props.src, &props.fallback_src);

    {
        let source = source.clone();
        use_effect_with_deps(
            move |(src, fallback): &(AttrValue, Option<AttrValue>)| {
                if !source.matches(src, fallback) {
                    source.set(ImageSource::new(src.clone(), fallback.clone()));
                }
                || ()
            },
            (props.src.clone(), props.fallback_src.clone()),
        );
    }

    let onerror = {
        let source = source.clone();
        let shown = shown.clone();
        Callback::from(move |_: Event| {
            let mut next = shown.clone();
            if next.record_failure() {
                source.set(next);
            }
        })
    };

    let style = match &props.style {
        Some(style) => format!("{}; opacity: {};", style.trim_end_matches(';'), shown.opacity()),
        None => format!("opacity: {};", shown.opacity()),
    };

    html! {
        <img
            src={shown.current().clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            {style}
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(primary: &'static str, fallback: Option<&'static str>) -> ImageSource {
        ImageSource::new(AttrValue::Static(primary), fallback.map(AttrValue::Static))
    }

    #[test]
    fn extensionless_reference_gets_png_appended() {
        let mut image = source("/logo", None);
        assert!(image.record_failure());
        assert_eq!(&**image.current(), "/logo.png");
        assert_eq!(image.stage(), FallbackStage::ExtensionRetried);
        assert_eq!(image.opacity(), 1);
    }

    #[test]
    fn png_reference_switches_to_explicit_fallback() {
        let mut image = source("/hero.png", Some("/placeholder.jpg"));
        assert!(image.record_failure());
        assert_eq!(&**image.current(), "/placeholder.jpg");
        assert_eq!(image.stage(), FallbackStage::FallbackApplied);
        assert_eq!(image.opacity(), 1);
    }

    #[test]
    fn logo_without_fallback_ends_transparent() {
        let mut image = source("/logo", None);
        image.record_failure();
        assert!(image.record_failure());
        assert_eq!(&**image.current(), "/logo.png");
        assert_eq!(image.stage(), FallbackStage::Exhausted);
        assert_eq!(image.opacity(), 0);
    }

    #[test]
    fn full_chain_then_terminal() {
        let mut image = source("/icon", Some("/default.png"));
        image.record_failure();
        assert_eq!(&**image.current(), "/icon.png");
        image.record_failure();
        assert_eq!(&**image.current(), "/default.png");
        assert_eq!(image.stage(), FallbackStage::FallbackApplied);

        assert!(image.record_failure());
        assert_eq!(image.stage(), FallbackStage::Exhausted);
        assert_eq!(&**image.current(), "/default.png");

        let settled = image.clone();
        assert!(!image.record_failure());
        assert_eq!(image, settled);
    }

    #[test]
    fn displayed_reference_stops_changing_after_two_failures() {
        for (primary, fallback) in [
            ("/a", None),
            ("/a", Some("/b.png")),
            ("/a.png", None),
            ("/a.png", Some("/b.png")),
        ] {
            let mut image = source(primary, fallback);
            image.record_failure();
            image.record_failure();
            let shown = image.current().clone();
            image.record_failure();
            image.record_failure();
            assert_eq!(image.current(), &shown, "{} / {:?}", primary, fallback);
        }
    }

    #[test]
    fn fallback_equal_to_current_is_skipped() {
        let mut image = source("/same.png", Some("/same.png"));
        image.record_failure();
        assert_eq!(image.stage(), FallbackStage::Exhausted);
        assert_eq!(image.opacity(), 0);
    }

    #[test]
    fn query_string_still_gets_extension_first() {
        let mut image = source("/img?w=80", Some("/fallback.png"));
        image.record_failure();
        assert_eq!(&**image.current(), "/img?w=80.png");
        image.record_failure();
        assert_eq!(&**image.current(), "/fallback.png");
    }

    #[test]
    fn empty_reference_is_not_extension_retried() {
        let mut image = source("", Some("/fallback.png"));
        image.record_failure();
        assert_eq!(&**image.current(), "/fallback.png");

        let mut bare = source("", None);
        bare.record_failure();
        assert_eq!(bare.stage(), FallbackStage::Exhausted);
        assert_eq!(&**bare.current(), "");
    }

    #[test]
    fn new_reference_starts_over_even_when_exhausted() {
        let mut image = source("/old", None);
        image.record_failure();
        image.record_failure();
        assert_eq!(image.opacity(), 0);

        let fresh = image.rebased(&AttrValue::Static("/new.png"), &None);
        assert_eq!(&**fresh.current(), "/new.png");
        assert_eq!(fresh.stage(), FallbackStage::Primary);
        assert_eq!(fresh.opacity(), 1);
    }

    #[test]
    fn rebasing_on_the_same_props_keeps_progress() {
        let mut image = source("/logo", None);
        image.record_failure();
        let kept = image.rebased(&AttrValue::Static("/logo"), &None);
        assert_eq!(kept, image);
    }

    #[test]
    fn state_is_tied_to_its_props() {
        let image = source("/logo", None);
        assert!(image.matches(&AttrValue::Static("/logo"), &None));
        assert!(!image.matches(&AttrValue::Static("/other"), &None));
        assert!(!image.matches(&AttrValue::Static("/logo"), &Some(AttrValue::Static("/x.png"))));
    }
}
