//! Community libraries

use super::extension::{Dependency, Extension};
use super::Platform;
use crate::versions::Artifact;

pub static THIRD_PARTY: &[Extension] = &[
    Extension::third_party(
        "anim8",
        "Anim8",
        "Support for exporting animated GIF and animated PNG images from libGDX applications.",
        "https://github.com/tommyettinger/anim8-gdx",
    )
    .versioned(Artifact::maven("com.github.tommyettinger", "anim8-gdx"), "anim8Version", "0.4.1")
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.tommyettinger:anim8-gdx"),
        Dependency::Sources(Platform::Html, "com.github.tommyettinger:anim8-gdx"),
    ])
    .gwt(&["com.github.tommyettinger.anim8"]),
    Extension::third_party(
        "artemisOdb",
        "Artemis-odb",
        "A high performance Entity-Component-System framework.",
        "https://github.com/junkdog/artemis-odb",
    )
    .versioned(
        Artifact::maven("net.onedaybeard.artemis", "artemis-odb"),
        "artemisOdbVersion",
        "2.3.0",
    )
    .dependencies(&[
        Dependency::Library(Platform::Core, "net.onedaybeard.artemis:artemis-odb"),
        Dependency::Library(Platform::Html, "net.onedaybeard.artemis:artemis-odb-gwt"),
        Dependency::Sources(Platform::Html, "net.onedaybeard.artemis:artemis-odb-gwt"),
        Dependency::Sources(Platform::Html, "net.onedaybeard.artemis:artemis-odb"),
    ])
    .gwt(&["com.artemis.backends.artemis_backends_gwt"]),
    Extension::third_party(
        "colorful",
        "colorful-gdx",
        "Color manipulation in perceptually-uniform color spaces, with shaders to match.",
        "https://github.com/tommyettinger/colorful-gdx",
    )
    .versioned(Artifact::maven("com.github.tommyettinger", "colorful"), "colorfulVersion", "0.8.4")
    .requires(&["digital"])
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.tommyettinger:colorful"),
        Dependency::Sources(Platform::Html, "com.github.tommyettinger:colorful"),
    ])
    .gwt(&["com.github.tommyettinger.colorful.colorful"]),
    Extension::third_party(
        "digital",
        "digital",
        "Utilities for math, random number generation, and hashing.",
        "https://github.com/tommyettinger/digital",
    )
    .versioned(Artifact::maven("com.github.tommyettinger", "digital"), "digitalVersion", "0.4.3")
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.tommyettinger:digital"),
        Dependency::Sources(Platform::Html, "com.github.tommyettinger:digital"),
    ])
    .gwt(&["digital"]),
    Extension::third_party(
        "gdxGltf",
        "gdx-gltf",
        "3D format glTF 2.0 support and PBR shader implementation.",
        "https://github.com/mgsx-dev/gdx-gltf",
    )
    .versioned(
        Artifact::jitpack("com.github.mgsx-dev.gdx-gltf", "gltf"),
        "gdxGltfVersion",
        "2.1.0",
    )
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.mgsx-dev.gdx-gltf:gltf"),
        Dependency::Sources(Platform::Html, "com.github.mgsx-dev.gdx-gltf:gltf"),
    ])
    .gwt(&["GLTF"]),
    Extension::third_party(
        "kryonet",
        "KryoNet",
        "TCP and UDP client/server networking library for Java.",
        "https://github.com/crykn/kryonet",
    )
    .versioned(Artifact::jitpack("com.github.crykn", "kryonet"), "kryoNetVersion", "2.22.9")
    .dependencies(&[Dependency::Library(Platform::Core, "com.github.crykn:kryonet")])
    .permissions(&["android.permission.INTERNET"]),
    Extension::third_party(
        "noise4j",
        "Noise4J",
        "Map generation utilities.",
        "https://github.com/czyzby/noise4j",
    )
    .versioned(Artifact::maven("com.github.czyzby", "noise4j"), "noise4jVersion", "0.1.0")
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.czyzby:noise4j"),
        Dependency::Sources(Platform::Html, "com.github.czyzby:noise4j"),
    ])
    .gwt(&["com.github.czyzby.noise4j.Noise4J"]),
    Extension::third_party(
        "pieMenu",
        "PieMenu",
        "A radial menu widget for scene2d.",
        "https://github.com/payne911/PieMenu",
    )
    .versioned(Artifact::jitpack("com.github.payne911", "PieMenu"), "pieMenuVersion", "5.0.0")
    .requires(&["shapeDrawer"])
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.payne911:PieMenu"),
        Dependency::Sources(Platform::Html, "com.github.payne911:PieMenu"),
    ])
    .gwt(&["PieMenu"]),
    Extension::third_party(
        "regExodus",
        "RegExodus",
        "A mostly-drop-in replacement for java.util.regex that also works on GWT.",
        "https://github.com/tommyettinger/RegExodus",
    )
    .versioned(Artifact::maven("com.github.tommyettinger", "regexodus"), "regExodusVersion", "0.1.16")
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.tommyettinger:regexodus"),
        Dependency::Sources(Platform::Html, "com.github.tommyettinger:regexodus"),
    ])
    .gwt(&["regexodus"]),
    Extension::third_party(
        "shapeDrawer",
        "Shape Drawer",
        "Draw primitive shapes with a batch.",
        "https://github.com/earlygrey/shapedrawer",
    )
    .versioned(Artifact::maven("space.earlygrey", "shapedrawer"), "shapeDrawerVersion", "2.6.0")
    .dependencies(&[
        Dependency::Library(Platform::Core, "space.earlygrey:shapedrawer"),
        Dependency::Sources(Platform::Html, "space.earlygrey:shapedrawer"),
    ])
    .gwt(&["space.earlygrey.shapedrawer"]),
    Extension::third_party(
        "simpleGraphs",
        "Simple Graphs",
        "A library for simple graph data structures and algorithms.",
        "https://github.com/earlygrey/simple-graphs",
    )
    .versioned(Artifact::maven("space.earlygrey", "simple-graphs"), "simpleGraphsVersion", "5.1.1")
    .dependencies(&[
        Dependency::Library(Platform::Core, "space.earlygrey:simple-graphs"),
        Dependency::Sources(Platform::Html, "space.earlygrey:simple-graphs"),
    ])
    .gwt(&["simple_graphs"]),
    Extension::third_party(
        "textraTypist",
        "TextraTypist",
        "Text-display library with effects, styles and emoji.",
        "https://github.com/tommyettinger/textratypist",
    )
    .versioned(
        Artifact::maven("com.github.tommyettinger", "textratypist"),
        "textraTypistVersion",
        "0.10.0",
    )
    .requires(&["regExodus"])
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.github.tommyettinger:textratypist"),
        Dependency::Sources(Platform::Html, "com.github.tommyettinger:textratypist"),
    ])
    .gwt(&["com.github.tommyettinger.textratypist"])
    .reflected(&["com.github.tommyettinger.textra"]),
    Extension::third_party(
        "typingLabel",
        "Typing Label",
        "A scene2d.ui text widget with a hint of fantasy.",
        "https://github.com/rafaskb/typing-label",
    )
    .versioned(Artifact::maven("com.rafaskoberg.gdx", "typing-label"), "typingLabelVersion", "1.3.0")
    .requires(&["regExodus"])
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.rafaskoberg.gdx:typing-label"),
        Dependency::Sources(Platform::Html, "com.rafaskoberg.gdx:typing-label"),
    ])
    .gwt(&["com.rafaskoberg.gdx.typinglabel.typinglabel"]),
    Extension::third_party(
        "visUi",
        "VisUI",
        "Flat design skin and UI widgets for scene2d.",
        "https://github.com/kotcrab/vis-ui",
    )
    .versioned(Artifact::maven("com.kotcrab.vis", "vis-ui"), "visUiVersion", "1.5.3")
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.kotcrab.vis:vis-ui"),
        Dependency::Sources(Platform::Html, "com.kotcrab.vis:vis-ui"),
    ])
    .gwt(&["com.kotcrab.vis.vis-ui"])
    .reflected(&["com.kotcrab.vis.ui"]),
];
