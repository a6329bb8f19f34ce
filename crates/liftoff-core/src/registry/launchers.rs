//! Launcher sources and per-platform configuration files

use crate::project::Project;

pub(crate) const ANDROID_PROGUARD: &str = "\
-verbose

-dontwarn android.support.**
-dontwarn com.badlogic.gdx.backends.android.AndroidFragmentApplication

# Required if using Gdx-Controllers extension
-keep class com.badlogic.gdx.controllers.android.AndroidControllers

# Required if using Box2D extension
-keepclassmembers class com.badlogic.gdx.physics.box2d.World {
   boolean contactFilter(long, long);
   void    beginContact(long);
   void    endContact(long);
   void    preSolve(long, long);
   void    postSolve(long, long);
   boolean reportFixture(long);
   float   reportRayFixture(long, float, float, float, float, float);
}
";

pub(crate) const ROBOVM_XML: &str = r#"<config>
  <executableName>${app.executable}</executableName>
  <mainClass>${app.mainclass}</mainClass>
  <os>ios</os>
  <target>ios</target>
  <iosInfoPList>Info.plist.xml</iosInfoPList>
  <resources>
    <resource>
      <directory>../assets</directory>
      <includes>
        <include>**</include>
      </includes>
      <skipPngCrush>true</skipPngCrush>
    </resource>
    <resource>
      <directory>data</directory>
    </resource>
  </resources>
  <forceLinkClasses>
    <pattern>com.badlogic.gdx.scenes.scene2d.ui.*</pattern>
    <pattern>com.badlogic.gdx.graphics.g3d.particles.**</pattern>
    <pattern>com.android.okhttp.HttpHandler</pattern>
    <pattern>com.android.okhttp.HttpsHandler</pattern>
    <pattern>com.android.org.conscrypt.**</pattern>
  </forceLinkClasses>
  <libs>
    <lib>z</lib>
  </libs>
  <frameworks>
    <framework>UIKit</framework>
    <framework>OpenGLES</framework>
    <framework>QuartzCore</framework>
    <framework>CoreGraphics</framework>
    <framework>OpenAL</framework>
    <framework>AudioToolbox</framework>
    <framework>AVFoundation</framework>
  </frameworks>
</config>
"#;

pub(crate) const ANDROID_STYLES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
  <style name="GdxTheme" parent="android:Theme">
    <item name="android:background">@android:color/transparent</item>
    <item name="android:colorBackgroundCacheHint">@null</item>
    <item name="android:windowAnimationStyle">@android:style/Animation</item>
    <item name="android:windowNoTitle">true</item>
    <item name="android:windowContentOverlay">@null</item>
    <item name="android:windowFullscreen">true</item>
  </style>
</resources>
"#;

/// `${app.*}` placeholders are filled in by RoboVM from `robovm.properties`
pub(crate) const INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
  <key>CFBundleDevelopmentRegion</key>
  <string>en</string>
  <key>CFBundleDisplayName</key>
  <string>${app.name}</string>
  <key>CFBundleExecutable</key>
  <string>${app.executable}</string>
  <key>CFBundleIdentifier</key>
  <string>${app.id}</string>
  <key>CFBundleInfoDictionaryVersion</key>
  <string>6.0</string>
  <key>CFBundleName</key>
  <string>${app.name}</string>
  <key>CFBundlePackageType</key>
  <string>APPL</string>
  <key>CFBundleShortVersionString</key>
  <string>${app.version}</string>
  <key>CFBundleSignature</key>
  <string>????</string>
  <key>CFBundleVersion</key>
  <string>${app.build}</string>
  <key>LSRequiresIPhoneOS</key>
  <true/>
  <key>UIViewControllerBasedStatusBarAppearance</key>
  <false/>
  <key>UIStatusBarHidden</key>
  <true/>
  <key>UIDeviceFamily</key>
  <array>
    <integer>1</integer>
    <integer>2</integer>
  </array>
  <key>UIRequiredDeviceCapabilities</key>
  <array>
    <string>opengles-2</string>
  </array>
  <key>UISupportedInterfaceOrientations</key>
  <array>
    <string>UIInterfaceOrientationLandscapeLeft</string>
    <string>UIInterfaceOrientationLandscapeRight</string>
  </array>
</dict>
</plist>
"#;

pub(crate) const HTML_STYLES: &str = "\
canvas {
  cursor: default;
  outline: none;
}

body {
  background-color: #222222;
}
";

fn main_import(project: &Project) -> String {
    format!("import {}.{};", project.root_package, project.main_class)
}

pub(crate) fn lwjgl3_launcher(project: &Project) -> String {
    format!(
        r#"package {package}.lwjgl3;

import com.badlogic.gdx.backends.lwjgl3.Lwjgl3Application;
import com.badlogic.gdx.backends.lwjgl3.Lwjgl3ApplicationConfiguration;
{import}

/** Launches the desktop (LWJGL3) application. */
public class Lwjgl3Launcher {{
    public static void main(String[] args) {{
        createApplication();
    }}

    private static Lwjgl3Application createApplication() {{
        return new Lwjgl3Application(new {main}(), getDefaultConfiguration());
    }}

    private static Lwjgl3ApplicationConfiguration getDefaultConfiguration() {{
        Lwjgl3ApplicationConfiguration configuration = new Lwjgl3ApplicationConfiguration();
        configuration.setTitle("{name}");
        configuration.useVsync(true);
        configuration.setForegroundFPS(Lwjgl3ApplicationConfiguration.getDisplayMode().refreshRate + 1);
        configuration.setWindowedMode(640, 480);
        configuration.setWindowIcon("libgdx128.png", "libgdx64.png", "libgdx32.png", "libgdx16.png");
        return configuration;
    }}
}}
"#,
        package = project.root_package,
        import = main_import(project),
        main = project.main_class,
        name = project.name,
    )
}

pub(crate) fn android_launcher(project: &Project) -> String {
    format!(
        r#"package {package}.android;

import android.os.Bundle;

import com.badlogic.gdx.backends.android.AndroidApplication;
import com.badlogic.gdx.backends.android.AndroidApplicationConfiguration;
{import}

/** Launches the Android application. */
public class AndroidLauncher extends AndroidApplication {{
    @Override
    protected void onCreate(Bundle savedInstanceState) {{
        super.onCreate(savedInstanceState);
        AndroidApplicationConfiguration configuration = new AndroidApplicationConfiguration();
        configuration.useImmersiveMode = true;
        initialize(new {main}(), configuration);
    }}
}}
"#,
        package = project.root_package,
        import = main_import(project),
        main = project.main_class,
    )
}

pub(crate) fn android_manifest(project: &Project) -> String {
    let permissions: String = project
        .android_permissions
        .iter()
        .map(|p| format!("  <uses-permission android:name=\"{p}\" />\n"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:tools="http://schemas.android.com/tools">
  <uses-feature android:glEsVersion="0x00020000" android:required="true" />
{permissions}  <application
      android:allowBackup="true"
      android:fullBackupContent="true"
      android:icon="@drawable/ic_launcher"
      android:isGame="true"
      android:appCategory="game"
      android:label="@string/app_name"
      tools:ignore="UnusedAttribute"
      android:theme="@style/GdxTheme">
    <activity
        android:name="{package}.android.AndroidLauncher"
        android:label="@string/app_name"
        android:screenOrientation="landscape"
        android:configChanges="keyboard|keyboardHidden|navigation|orientation|screenSize|screenLayout"
        android:exported="true">
      <intent-filter>
        <action android:name="android.intent.action.MAIN" />
        <category android:name="android.intent.category.LAUNCHER" />
      </intent-filter>
    </activity>
  </application>
</manifest>
"#,
        package = project.root_package,
    )
}

pub(crate) fn android_strings(project: &Project) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n  <string name=\"app_name\">{}</string>\n</resources>\n",
        project.name
    )
}

pub(crate) fn ios_launcher(project: &Project) -> String {
    format!(
        r#"package {package};

import org.robovm.apple.foundation.NSAutoreleasePool;
import org.robovm.apple.uikit.UIApplication;

import com.badlogic.gdx.backends.iosrobovm.IOSApplication;
import com.badlogic.gdx.backends.iosrobovm.IOSApplicationConfiguration;

/** Launches the iOS (RoboVM) application. */
public class IOSLauncher extends IOSApplication.Delegate {{
    @Override
    protected IOSApplication createApplication() {{
        IOSApplicationConfiguration configuration = new IOSApplicationConfiguration();
        return new IOSApplication(new {main}(), configuration);
    }}

    public static void main(String[] argv) {{
        NSAutoreleasePool pool = new NSAutoreleasePool();
        UIApplication.main(argv, null, IOSLauncher.class);
        pool.close();
    }}
}}
"#,
        package = project.root_package,
        main = project.main_class,
    )
}

pub(crate) fn robovm_properties(project: &Project) -> String {
    format!(
        "app.version={}\napp.id={}\napp.mainclass={}.IOSLauncher\napp.executable=IOSLauncher\napp.build=1\napp.name={}\n",
        project.advanced.app_version, project.root_package, project.root_package, project.name
    )
}

pub(crate) fn core_gwt_module(project: &Project) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE module PUBLIC "-//Google Inc.//DTD Google Web Toolkit trunk//EN" "https://www.gwtproject.org/doctype/2.10.0/gwt-module.dtd">
<module>
  <source path="{}" />
</module>
"#,
        project.package_path()
    )
}

pub(crate) fn gwt_definition(project: &Project, superdev: bool) -> String {
    let mut inherits = String::from(
        "  <inherits name=\"com.badlogic.gdx.backends.gdx_backends_gwt\" />\n",
    );
    for name in &project.gwt_inherits {
        inherits.push_str(&format!("  <inherits name=\"{name}\" />\n"));
    }
    inherits.push_str(&format!("  <inherits name=\"{}\" />\n", project.main_class));
    if superdev {
        inherits.push_str("  <inherits name=\"com.badlogic.gdx.backends.gdx_backends_gwt_superdev\" />\n");
    }

    let reflected: String = project
        .reflected_classes
        .iter()
        .map(|c| format!("  <extend-configuration-property name=\"gdx.reflect.include\" value=\"{c}\" />\n"))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE module PUBLIC "-//Google Inc.//DTD Google Web Toolkit trunk//EN" "https://www.gwtproject.org/doctype/2.10.0/gwt-module.dtd">
<module rename-to="html">
  <source path="" />
{inherits}{reflected}  <entry-point class="{package}.gwt.GwtLauncher" />
  <set-configuration-property name="gdx.assetpath" value="../assets" />
  <set-configuration-property name="xsiframe.failIfScriptTag" value="FALSE"/>
  <set-property name="user.agent" value="gecko1_8, safari"/>
  <collapse-property name="user.agent" values="*" />
</module>
"#,
        package = project.root_package,
    )
}

pub(crate) fn gwt_launcher(project: &Project) -> String {
    format!(
        r#"package {package}.gwt;

import com.badlogic.gdx.ApplicationListener;
import com.badlogic.gdx.backends.gwt.GwtApplication;
import com.badlogic.gdx.backends.gwt.GwtApplicationConfiguration;
{import}

/** Launches the GWT application. */
public class GwtLauncher extends GwtApplication {{
    @Override
    public GwtApplicationConfiguration getConfig() {{
        GwtApplicationConfiguration cfg = new GwtApplicationConfiguration(true);
        cfg.padVertical = 0;
        cfg.padHorizontal = 0;
        return cfg;
    }}

    @Override
    public ApplicationListener createApplicationListener() {{
        return new {main}();
    }}
}}
"#,
        package = project.root_package,
        import = main_import(project),
        main = project.main_class,
    )
}

pub(crate) fn html_index(project: &Project) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
  <title>{name}</title>
  <meta http-equiv="content-type" content="text/html; charset=UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no, minimal-ui">
  <link href="styles.css" rel="stylesheet" type="text/css">
</head>

<body>
  <div align="center" id="embed-html"></div>
  <script type="text/javascript" src="html/html.nocache.js"></script>
</body>

<script>
  function handleMouseDown(evt) {{
    evt.preventDefault();
    evt.stopPropagation();
    window.focus();
  }}

  function handleMouseUp(evt) {{
    evt.preventDefault();
    evt.stopPropagation();
  }}
  document.getElementById('embed-html').addEventListener('mousedown', handleMouseDown, false);
  document.getElementById('embed-html').addEventListener('mouseup', handleMouseUp, false);
</script>
</html>
"#,
        name = project.name,
    )
}

pub(crate) fn headless_launcher(project: &Project) -> String {
    format!(
        r#"package {package}.headless;

import com.badlogic.gdx.backends.headless.HeadlessApplication;
import com.badlogic.gdx.backends.headless.HeadlessApplicationConfiguration;
{import}

/** Launches the headless application. Can be converted into a server application or a scripting utility. */
public class HeadlessLauncher {{
    public static void main(String[] args) {{
        HeadlessApplicationConfiguration configuration = new HeadlessApplicationConfiguration();
        // When this value is negative, {main}#render() is never called:
        configuration.updatesPerSecond = -1;
        new HeadlessApplication(new {main}(), configuration);
    }}
}}
"#,
        package = project.root_package,
        import = main_import(project),
        main = project.main_class,
    )
}

pub(crate) fn server_launcher(project: &Project) -> String {
    format!(
        r#"package {package}.server;

/** Launches the server application. */
public class ServerLauncher {{
    public static void main(String[] args) {{
        // TODO Implement server application.
    }}
}}
"#,
        package = project.root_package,
    )
}

pub(crate) fn teavm_builder(project: &Project) -> String {
    let reflected: String = project
        .reflected_classes
        .iter()
        .chain(project.reflected_packages.iter())
        .map(|name| format!("        TeaReflectionSupplier.addReflectionClass(\"{name}\");\n"))
        .collect();
    format!(
        r#"package {package}.teavm;

import com.github.xpenatan.gdx.backends.teavm.config.AssetFileHandle;
import com.github.xpenatan.gdx.backends.teavm.config.TeaBuildConfiguration;
import com.github.xpenatan.gdx.backends.teavm.config.TeaBuilder;
import com.github.xpenatan.gdx.backends.teavm.gen.SkipClass;
import com.github.xpenatan.gdx.backends.teavm.config.plugins.TeaReflectionSupplier;
import java.io.File;
import java.io.IOException;
import org.teavm.tooling.TeaVMTool;

/** Builds the TeaVM/HTML application. */
@SkipClass
public class TeaVMBuilder {{
    public static void main(String[] args) throws IOException {{
        TeaBuildConfiguration teaBuildConfiguration = new TeaBuildConfiguration();
        teaBuildConfiguration.assetsPath.add(new AssetFileHandle("../assets"));
        teaBuildConfiguration.webappPath = new File("build/dist").getCanonicalPath();
        teaBuildConfiguration.htmlTitle = "{name}";

{reflected}
        TeaVMTool tool = TeaBuilder.config(teaBuildConfiguration);
        tool.setMainClass(TeaVMLauncher.class.getName());
        TeaBuilder.build(tool);
    }}
}}
"#,
        package = project.root_package,
        name = project.name,
    )
}

pub(crate) fn teavm_launcher(project: &Project) -> String {
    format!(
        r#"package {package}.teavm;

import com.github.xpenatan.gdx.backends.teavm.TeaApplicationConfiguration;
import com.github.xpenatan.gdx.backends.teavm.TeaApplication;
{import}

/** Launches the TeaVM/HTML application. */
public class TeaVMLauncher {{
    public static void main(String[] args) {{
        TeaApplicationConfiguration config = new TeaApplicationConfiguration("canvas");
        config.width = 0;
        config.height = 0;
        new TeaApplication(new {main}(), config);
    }}
}}
"#,
        package = project.root_package,
        import = main_import(project),
        main = project.main_class,
    )
}
