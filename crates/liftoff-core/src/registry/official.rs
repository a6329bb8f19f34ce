//! Extensions maintained by the libGDX team

use super::extension::{Dependency, Extension};
use super::Platform;
use crate::versions::Artifact;

pub static OFFICIAL: &[Extension] = &[
    Extension::official(
        "ai",
        "AI",
        "Artificial Intelligence framework.",
        "https://github.com/libgdx/gdx-ai",
    )
    .versioned(Artifact::maven("com.badlogicgames.gdx", "gdx-ai"), "aiVersion", "1.8.2")
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.badlogicgames.gdx:gdx-ai"),
        Dependency::Sources(Platform::Html, "com.badlogicgames.gdx:gdx-ai"),
    ])
    .gwt(&["com.badlogic.gdx.ai"])
    .reflected_classes(&[
        "com.badlogic.gdx.ai.btree.branch.Parallel",
        "com.badlogic.gdx.ai.btree.branch.Selector",
        "com.badlogic.gdx.ai.btree.branch.Sequence",
        "com.badlogic.gdx.ai.btree.decorator.Invert",
    ]),
    Extension::official(
        "ashley",
        "Ashley",
        "Lightweight Entity framework.",
        "https://github.com/libgdx/ashley",
    )
    .versioned(Artifact::maven("com.badlogicgames.ashley", "ashley"), "ashleyVersion", "1.7.4")
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.badlogicgames.ashley:ashley"),
        Dependency::Sources(Platform::Html, "com.badlogicgames.ashley:ashley"),
    ])
    .gwt(&["com.badlogic.ashley_gwt"])
    .reflected(&["com.badlogic.ashley.core", "com.badlogic.ashley.systems"]),
    Extension::official(
        "box2d",
        "Box2D",
        "Box2D is a 2D physics library.",
        "https://libgdx.com/wiki/extensions/physics/box2d",
    )
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.badlogicgames.gdx:gdx-box2d"),
        Dependency::Natives("gdx-box2d-platform"),
        Dependency::Library(Platform::Html, "com.badlogicgames.gdx:gdx-box2d-gwt"),
        Dependency::Sources(Platform::Html, "com.badlogicgames.gdx:gdx-box2d-gwt"),
        Dependency::Sources(Platform::Html, "com.badlogicgames.gdx:gdx-box2d"),
        Dependency::Library(Platform::TeaVM, "com.badlogicgames.gdx:gdx-box2d"),
    ])
    .gwt(&["com.badlogic.gdx.physics.box2d.box2d-gwt"]),
    Extension::official(
        "box2dlights",
        "Box2DLights",
        "2D lighting framework that uses Box2D for raycasting and OpenGL ES 2.0 for rendering.",
        "https://github.com/libgdx/box2dlights",
    )
    .versioned(
        Artifact::maven("com.badlogicgames.box2dlights", "box2dlights"),
        "box2dlightsVersion",
        "1.5",
    )
    .requires(&["box2d"])
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.badlogicgames.box2dlights:box2dlights"),
        Dependency::Sources(Platform::Html, "com.badlogicgames.box2dlights:box2dlights"),
    ])
    .gwt(&["Box2DLights"]),
    Extension::official(
        "bullet",
        "Bullet",
        "3D collision detection and rigid body dynamics.",
        "https://libgdx.com/wiki/extensions/physics/bullet/bullet-physics",
    )
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.badlogicgames.gdx:gdx-bullet"),
        Dependency::Natives("gdx-bullet-platform"),
    ]),
    Extension::official(
        "controllers",
        "Controllers",
        "Controller/gamepad API.",
        "https://github.com/libgdx/gdx-controllers",
    )
    .versioned(
        Artifact::maven("com.badlogicgames.gdx-controllers", "gdx-controllers-core"),
        "gdxControllersVersion",
        "2.2.3",
    )
    .dependencies(&[
        Dependency::Library(
            Platform::Core,
            "com.badlogicgames.gdx-controllers:gdx-controllers-core",
        ),
        Dependency::Library(
            Platform::Lwjgl3,
            "com.badlogicgames.gdx-controllers:gdx-controllers-desktop",
        ),
        Dependency::Library(
            Platform::Android,
            "com.badlogicgames.gdx-controllers:gdx-controllers-android",
        ),
        Dependency::Library(
            Platform::Ios,
            "com.badlogicgames.gdx-controllers:gdx-controllers-ios",
        ),
        Dependency::Library(
            Platform::Html,
            "com.badlogicgames.gdx-controllers:gdx-controllers-gwt",
        ),
        Dependency::Sources(
            Platform::Html,
            "com.badlogicgames.gdx-controllers:gdx-controllers-gwt",
        ),
        Dependency::Sources(
            Platform::Html,
            "com.badlogicgames.gdx-controllers:gdx-controllers-core",
        ),
    ])
    .gwt(&[
        "com.badlogic.gdx.controllers",
        "com.badlogic.gdx.controllers.controllers-gwt",
    ]),
    Extension::official(
        "freetype",
        "FreeType",
        "Generate BitmapFonts from .ttf font files.",
        "https://libgdx.com/wiki/extensions/gdx-freetype",
    )
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.badlogicgames.gdx:gdx-freetype"),
        Dependency::Natives("gdx-freetype-platform"),
    ]),
    Extension::official(
        "tools",
        "Tools",
        "Collection of tools, including 2D/3D particle editors, texture packers, and file processors.",
        "https://libgdx.com/wiki/tools/overview",
    )
    .dependencies(&[Dependency::Library(
        Platform::Lwjgl3,
        "com.badlogicgames.gdx:gdx-tools",
    )]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_official() {
        assert!(OFFICIAL.iter().all(Extension::is_official));
    }

    #[test]
    fn test_unversioned_extensions_follow_gdx() {
        let box2d = OFFICIAL.iter().find(|e| e.id == "box2d").unwrap();
        assert_eq!(box2d.version_reference(), "$gdxVersion");
        let ai = OFFICIAL.iter().find(|e| e.id == "ai").unwrap();
        assert_eq!(ai.version_reference(), "$aiVersion");
    }
}
