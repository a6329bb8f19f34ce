use super::TemplateSource;
use crate::project::Project;

pub(super) fn classic(project: &Project) -> Vec<TemplateSource> {
    vec![(
        format!("{}.kt", project.main_class),
        format!(
            r#"package {package}

import com.badlogic.gdx.ApplicationAdapter
import com.badlogic.gdx.graphics.Texture
import com.badlogic.gdx.graphics.g2d.SpriteBatch
import com.badlogic.gdx.utils.ScreenUtils

/** [com.badlogic.gdx.ApplicationListener] implementation shared by all platforms. */
class {main} : ApplicationAdapter() {{
    private val batch by lazy {{ SpriteBatch() }}
    private val image by lazy {{ Texture("libgdx.png") }}

    override fun render() {{
        ScreenUtils.clear(0.15f, 0.15f, 0.2f, 1f)
        batch.begin()
        batch.draw(image, 140f, 210f)
        batch.end()
    }}

    override fun dispose() {{
        batch.dispose()
        image.dispose()
    }}
}}
"#,
            package = project.root_package,
            main = project.main_class,
        ),
    )]
}

pub(super) fn ktx(project: &Project) -> Vec<TemplateSource> {
    vec![(
        format!("{}.kt", project.main_class),
        format!(
            r#"package {package}

import com.badlogic.gdx.graphics.Texture
import com.badlogic.gdx.graphics.Texture.TextureFilter.Linear
import com.badlogic.gdx.graphics.g2d.SpriteBatch
import ktx.app.KtxGame
import ktx.app.KtxScreen
import ktx.app.clearScreen
import ktx.assets.disposeSafely
import ktx.assets.toInternalFile
import ktx.async.KtxAsync
import ktx.graphics.use

class {main} : KtxGame<KtxScreen>() {{
    override fun create() {{
        KtxAsync.initiate()

        addScreen(FirstScreen())
        setScreen<FirstScreen>()
    }}
}}

class FirstScreen : KtxScreen {{
    private val image = Texture("libgdx.png".toInternalFile(), true).apply {{ setFilter(Linear, Linear) }}
    private val batch = SpriteBatch()

    override fun render(delta: Float) {{
        clearScreen(red = 0.7f, green = 0.7f, blue = 0.7f)
        batch.use {{
            it.draw(image, 100f, 160f)
        }}
    }}

    override fun dispose() {{
        image.disposeSafely()
        batch.disposeSafely()
    }}
}}
"#,
            package = project.root_package,
            main = project.main_class,
        ),
    )]
}
