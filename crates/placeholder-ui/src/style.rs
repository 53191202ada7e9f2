use crate::config::AnimationConfig;

/// Class token appended to generic leaf elements while loading.
pub const LOADING_CLASS: &str = "loading";

/// Class token appended to image elements while loading.
pub const LOADING_IMAGE_CLASS: &str = "loading-img";

/// Render the style block for a resolved animation config.
///
/// Defines the generic and image loading rules plus the shared shimmer
/// keyframes. Color and duration values are emitted verbatim; validating
/// them is the caller's concern.
pub fn style_block(config: &AnimationConfig) -> String {
    let [c0, c1, c2] = &config.colors;
    let gradient = format!("linear-gradient(90deg, {c0} 25%, {c1} 50%, {c2} 75%)");
    let animation = format!("shimmer {} infinite {}", config.speed, config.timing.as_str());

    format!(
        "\
.{LOADING_CLASS} {{
  background: {gradient};
  background-size: 200% 100%;
  animation: {animation};
  color: transparent;
  user-select: none;
  pointer-events: none;
}}

.{LOADING_IMAGE_CLASS} {{
  background: {gradient};
  background-size: 200% 100%;
  animation: {animation};
  object-fit: cover;
  content: \"\";
  color: transparent;
  user-select: none;
  pointer-events: none;
}}

@keyframes shimmer {{
  0% {{
    background-position: 200% 0;
  }}
  100% {{
    background-position: -200% 0;
  }}
}}
"
    )
}
