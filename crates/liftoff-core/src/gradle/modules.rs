use super::GradleFile;
use crate::project::Project;
use crate::registry::Platform;

const ANDROID_COMPILE_SDK: u32 = 34;
const ANDROID_MIN_SDK: u32 = 19;

/// Module-specific `build.gradle` around the accumulated dependencies
pub(super) fn render(file: &GradleFile, project: &Project) -> String {
    let package = &project.root_package;
    let id = file.platform().id();
    let dependencies = file.dependencies_block();
    let java = project.advanced.java_version;

    match file.platform() {
        Platform::Core | Platform::Shared => format!(
            "{plugins}[compileJava, compileTestJava]*.options*.encoding = 'UTF-8'\n\
             eclipse.project.name = appName + '-{id}'\n\n\
             {dependencies}",
            plugins = plugins(file),
        ),
        Platform::Lwjgl3 => format!(
            r#"{plugins}apply plugin: 'application'

sourceSets.main.resources.srcDirs += [ rootProject.file('assets').path ]
mainClassName = '{package}.lwjgl3.Lwjgl3Launcher'
application.setMainClass(mainClassName)
eclipse.project.name = appName + '-lwjgl3'
java.sourceCompatibility = {java}
java.targetCompatibility = {java}

{dependencies}
def os = System.properties['os.name'].toLowerCase()

run {{
  workingDir = rootProject.file('assets').path
  setIgnoreExitValue(true)

  if (os.contains('mac')) {{
    jvmArgs += "-XstartOnFirstThread"
  }}
}}

jar {{
  archiveFileName.set("${{appName}}-${{projectVersion}}.jar")
  duplicatesStrategy(DuplicatesStrategy.EXCLUDE)
  dependsOn configurations.runtimeClasspath
  from {{ configurations.runtimeClasspath.collect {{ it.isDirectory() ? it : zipTree(it) }} }}
  exclude('META-INF/INDEX.LIST', 'META-INF/*.SF', 'META-INF/*.DSA', 'META-INF/*.RSA')
  dependencies {{
    exclude('META-INF/INDEX.LIST', 'META-INF/maven/**')
  }}
  manifest {{
    attributes 'Main-Class': project.mainClassName
  }}
  doLast {{
    file(archiveFile).setExecutable(true, false)
  }}
}}
"#,
            plugins = plugins(file),
        ),
        Platform::Android => format!(
            r#"apply plugin: 'com.android.application'
{plugins}
android {{
  namespace "{package}"
  compileSdk {ANDROID_COMPILE_SDK}
  sourceSets {{
    main {{
      manifest.srcFile 'AndroidManifest.xml'
      java.setSrcDirs(['src/main/java'])
      aidl.setSrcDirs(['src/main/java'])
      renderscript.setSrcDirs(['src/main/java'])
      res.setSrcDirs(['res'])
      assets.setSrcDirs(['../assets'])
      jniLibs.setSrcDirs(['libs'])
    }}
  }}
  packagingOptions {{
    resources {{
      excludes += ['META-INF/robovm/ios/robovm.xml', 'META-INF/DEPENDENCIES.txt', 'META-INF/DEPENDENCIES',
                   'META-INF/dependencies.txt', '**/*.gwt.xml']
      pickFirsts += ['META-INF/LICENSE.txt', 'META-INF/LICENSE', 'META-INF/license.txt', 'META-INF/LGPL2.1',
                     'META-INF/NOTICE.txt', 'META-INF/NOTICE', 'META-INF/notice.txt']
    }}
  }}
  defaultConfig {{
    applicationId '{package}'
    minSdkVersion {ANDROID_MIN_SDK}
    targetSdkVersion {ANDROID_COMPILE_SDK}
    versionCode 1
    versionName "$projectVersion"
    multiDexEnabled true
  }}
  compileOptions {{
    sourceCompatibility "{java}"
    targetCompatibility "{java}"
    coreLibraryDesugaringEnabled true
  }}
  buildTypes {{
    release {{
      minifyEnabled true
      proguardFiles getDefaultProguardFile('proguard-android.txt'), 'proguard-rules.pro'
    }}
  }}
}}

repositories {{
  google()
}}

configurations {{ natives }}

{dependencies}
// Called every time gradle gets executed, takes the native dependencies of
// the natives configuration, and extracts them to the proper libs/ folders
// so they get packed with the APK.
tasks.register('copyAndroidNatives') {{
  doFirst {{
    file("libs/armeabi-v7a/").mkdirs()
    file("libs/arm64-v8a/").mkdirs()
    file("libs/x86_64/").mkdirs()
    file("libs/x86/").mkdirs()

    configurations.natives.copy().files.each {{ jar ->
      def outputDir = null
      if(jar.name.endsWith("natives-armeabi-v7a.jar")) outputDir = file("libs/armeabi-v7a")
      if(jar.name.endsWith("natives-arm64-v8a.jar")) outputDir = file("libs/arm64-v8a")
      if(jar.name.endsWith("natives-x86_64.jar")) outputDir = file("libs/x86_64")
      if(jar.name.endsWith("natives-x86.jar")) outputDir = file("libs/x86")
      if(outputDir != null) {{
        copy {{
          from zipTree(jar)
          into outputDir
          include "*.so"
        }}
      }}
    }}
  }}
}}
tasks.matching {{ it.name.contains("merge") && it.name.contains("JniLibFolders") }}.configureEach {{ packageTask ->
  packageTask.dependsOn 'copyAndroidNatives'
}}

eclipse.project.name = appName + '-android'
"#,
            plugins = plugins(file),
        ),
        Platform::Ios => format!(
            r#"{plugins}
[compileJava, compileTestJava]*.options*.encoding = 'UTF-8'

ext {{
  mainClassName = "{package}.IOSLauncher"
}}

launchIPhoneSimulator.dependsOn build
launchIPadSimulator.dependsOn build
launchIOSDevice.dependsOn build
createIPA.dependsOn build

eclipse.project.name = appName + '-ios'

{dependencies}"#,
            plugins = plugins(file),
        ),
        Platform::Html => format!(
            r#"{plugins}
gwt {{
  gwtVersion = "$gwtFrameworkVersion"
  maxHeapSize = '1G'
  minHeapSize = '1G'

  src = files(file('src/main/java'))

  modules '{package}.GdxDefinition'
  devModules '{package}.GdxDefinitionSuperdev'
  project.webAppDirName = 'webapp'

  compiler.strict = true
  compiler.disableCastChecking = true
}}

{dependencies}
import org.akhikhl.gretty.AppBeforeIntegrationTestTask
import org.docstr.gradle.plugins.gwt.GwtSuperDev

gretty.httpPort = 8080
gretty.resourceBase = project.layout.buildDirectory.dir("gwt/draftOut").get().asFile.absolutePath
gretty.contextPath = "/"
gretty.portPropertiesFileName = "temp.properties"

tasks.register('startHttpServer') {{
  dependsOn draftCompileGwt
  doFirst {{
    copy {{
      from "webapp"
      into "build/gwt/draftOut"
    }}
    copy {{
      from "war"
      into "build/gwt/draftOut"
    }}
  }}
}}

tasks.register('superDev', GwtSuperDev) {{
  dependsOn startHttpServer
  doFirst {{
    gwt.modules = gwt.devModules
  }}
}}

tasks.register('dist') {{
  dependsOn clean, compileGwt
  doLast {{
    file("build/dist").mkdirs()
    copy {{
      from "build/gwt/out"
      into "build/dist"
    }}
    copy {{
      from "webapp"
      into "build/dist"
    }}
    copy {{
      from "war"
      into "build/dist"
    }}
  }}
}}

java.sourceCompatibility = {java}
java.targetCompatibility = {java}
sourceSets.main.compileClasspath += files(project(':core').sourceSets.main.allJava.srcDirs)
sourceSets.main.resources.srcDirs += [ rootProject.file('assets').path ]

eclipse.project.name = appName + '-html'
"#,
            plugins = plugins(file),
        ),
        Platform::Headless | Platform::Server => format!(
            r#"{plugins}apply plugin: 'application'

java.sourceCompatibility = {java}
java.targetCompatibility = {java}
mainClassName = '{package}.{id}.{launcher}'
application.setMainClass(mainClassName)
eclipse.project.name = appName + '-{id}'

{dependencies}
jar {{
  archiveBaseName.set("${{appName}}-{id}")
  duplicatesStrategy(DuplicatesStrategy.EXCLUDE)
  dependsOn configurations.runtimeClasspath
  from {{ configurations.runtimeClasspath.collect {{ it.isDirectory() ? it : zipTree(it) }} }}
  manifest {{
    attributes 'Main-Class': project.mainClassName
  }}
}}
"#,
            plugins = plugins(file),
            launcher = if file.platform() == Platform::Server {
                "ServerLauncher"
            } else {
                "HeadlessLauncher"
            },
        ),
        Platform::TeaVM => format!(
            r#"{plugins}
java.sourceCompatibility = {java}
java.targetCompatibility = {java}
sourceSets.main.resources.srcDirs += [ rootProject.file('assets').path ]
eclipse.project.name = appName + '-teavm'

{dependencies}
tasks.register('buildJavaScript', JavaExec) {{
  dependsOn classes
  setDescription("Transpile bytecode to JavaScript via TeaVM")
  mainClass.set('{package}.teavm.TeaVMBuilder')
  classpath = sourceSets.main.runtimeClasspath
}}
build.dependsOn buildJavaScript

tasks.register("run", JavaExec) {{
  dependsOn buildJavaScript
  setDescription("Run the JavaScript application hosted via a local Jetty server at http://localhost:8080/")
  mainClass.set('{package}.teavm.TeaVMBuilder')
  classpath = sourceSets.main.runtimeClasspath
}}
"#,
            plugins = plugins(file),
        ),
    }
}

fn plugins(file: &GradleFile) -> String {
    let block = file.plugins_block();
    if block.is_empty() {
        block
    } else {
        format!("{block}\n")
    }
}
