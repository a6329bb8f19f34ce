//! Kotlin extensions (KTX)
//!
//! Every KTX module is released together and shares one `ktxVersion`
//! property, so the whole family is versioned through `ktx-app`.

use super::extension::{Dependency, Extension};
use super::{JvmLanguage, Platform};
use crate::versions::Artifact;

const KTX_ARTIFACT: Artifact = Artifact::maven("io.github.libktx", "ktx-app");
const KTX_FALLBACK: &str = "1.12.1-rev1";

macro_rules! ktx {
    ($id:literal, $module:literal, $description:literal) => {
        ktx!($id, $module, $description, requires: [])
    };
    ($id:literal, $module:literal, $description:literal, requires: [$($required:literal),*]) => {
        Extension::third_party(
            $id,
            concat!("ktx-", $module),
            $description,
            concat!("https://github.com/libktx/ktx/tree/master/", $module),
        )
        .versioned(KTX_ARTIFACT, "ktxVersion", KTX_FALLBACK)
        .language(JvmLanguage::Kotlin)
        .requires(&[$($required),*])
        .dependencies(&[Dependency::Library(
            Platform::Core,
            concat!("io.github.libktx:ktx-", $module),
        )])
    };
}

pub static KTX: &[Extension] = &[
    ktx!("ktxActors", "actors", "Kotlin extensions for Scene2D actors and event listeners."),
    ktx!("ktxApp", "app", "Kotlin extensions for ApplicationListener implementations and general application utilities."),
    ktx!("ktxAshley", "ashley", "Kotlin extensions for the Ashley entity-component-system.", requires: ["ashley"]),
    ktx!("ktxAssets", "assets", "Kotlin extensions for managing assets."),
    ktx!(
        "ktxAssetsAsync",
        "assets-async",
        "Non-blocking asset loading using coroutines.",
        requires: ["ktxAssets", "ktxAsync"]
    ),
    ktx!("ktxAsync", "async", "Kotlin coroutines context for libGDX threads.", requires: ["kotlinxCoroutines"]),
    ktx!("ktxBox2d", "box2d", "Kotlin Box2D physics engine DSL.", requires: ["box2d"]),
    ktx!("ktxCollections", "collections", "Kotlin extensions for libGDX custom collections."),
    ktx!(
        "ktxFreetype",
        "freetype",
        "Kotlin extensions for FreeType fonts loading.",
        requires: ["freetype", "ktxAssets"]
    ),
    ktx!("ktxGraphics", "graphics", "Kotlin extensions for libGDX graphics API."),
    ktx!("ktxInject", "inject", "A dependency injection system with low overhead and no reflection usage."),
    ktx!("ktxLog", "log", "Minimal runtime overhead cross-platform logging using inlined functions."),
    ktx!("ktxMath", "math", "Kotlin extensions for libGDX math API."),
    ktx!("ktxScene2d", "scene2d", "Kotlin type-safe builders for Scene2D widgets.", requires: ["ktxActors"]),
    ktx!("ktxStyle", "style", "Kotlin type-safe builders for Scene2D widget styles."),
    ktx!("ktxVis", "vis", "Kotlin type-safe builders for VisUI widgets.", requires: ["visUi", "ktxScene2d"]),
    ktx!("ktxVisStyle", "vis-style", "Kotlin type-safe builders for VisUI widget styles.", requires: ["visUi", "ktxStyle"]),
    Extension::third_party(
        "kotlinxCoroutines",
        "kotlinx.coroutines",
        "Kotlin coroutines support library.",
        "https://github.com/Kotlin/kotlinx.coroutines",
    )
    .versioned(
        Artifact::maven("org.jetbrains.kotlinx", "kotlinx-coroutines-core"),
        "kotlinxCoroutinesVersion",
        "1.7.3",
    )
    .language(JvmLanguage::Kotlin)
    .dependencies(&[Dependency::Library(
        Platform::Core,
        "org.jetbrains.kotlinx:kotlinx-coroutines-core",
    )]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_module_needs_kotlin() {
        assert!(KTX.iter().all(|e| e.language == Some(JvmLanguage::Kotlin)));
    }

    #[test]
    fn test_modules_share_version_property() {
        let vis = KTX.iter().find(|e| e.id == "ktxVis").unwrap();
        assert_eq!(vis.version_reference(), "$ktxVersion");
        assert_eq!(vis.requires, &["visUi", "ktxScene2d"]);
        assert_eq!(
            vis.dependencies,
            &[Dependency::Library(Platform::Core, "io.github.libktx:ktx-vis")]
        );
    }
}
