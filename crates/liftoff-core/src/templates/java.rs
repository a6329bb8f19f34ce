use super::TemplateSource;
use crate::project::Project;

fn main_file(project: &Project, content: String) -> Vec<TemplateSource> {
    vec![(format!("{}.java", project.main_class), content)]
}

pub(super) fn classic(project: &Project) -> Vec<TemplateSource> {
    main_file(
        project,
        format!(
            r#"package {package};

import com.badlogic.gdx.ApplicationAdapter;
import com.badlogic.gdx.graphics.Texture;
import com.badlogic.gdx.graphics.g2d.SpriteBatch;
import com.badlogic.gdx.utils.ScreenUtils;

/** {{@link com.badlogic.gdx.ApplicationListener}} implementation shared by all platforms. */
public class {main} extends ApplicationAdapter {{
    private SpriteBatch batch;
    private Texture image;

    @Override
    public void create() {{
        batch = new SpriteBatch();
        image = new Texture("libgdx.png");
    }}

    @Override
    public void render() {{
        ScreenUtils.clear(0.15f, 0.15f, 0.2f, 1f);
        batch.begin();
        batch.draw(image, 140, 210);
        batch.end();
    }}

    @Override
    public void dispose() {{
        batch.dispose();
        image.dispose();
    }}
}}
"#,
            package = project.root_package,
            main = project.main_class,
        ),
    )
}

pub(super) fn application_adapter(project: &Project) -> Vec<TemplateSource> {
    main_file(
        project,
        format!(
            r#"package {package};

import com.badlogic.gdx.ApplicationAdapter;

/** {{@link com.badlogic.gdx.ApplicationListener}} implementation shared by all platforms. */
public class {main} extends ApplicationAdapter {{
    @Override
    public void create() {{
    }}
}}
"#,
            package = project.root_package,
            main = project.main_class,
        ),
    )
}

pub(super) fn application_listener(project: &Project) -> Vec<TemplateSource> {
    main_file(
        project,
        format!(
            r#"package {package};

import com.badlogic.gdx.ApplicationListener;

/** {{@link com.badlogic.gdx.ApplicationListener}} implementation shared by all platforms. */
public class {main} implements ApplicationListener {{
    @Override
    public void create() {{
    }}

    @Override
    public void resize(int width, int height) {{
        // Resize your application here. The parameters represent the new window size.
    }}

    @Override
    public void render() {{
        // Draw your application here.
    }}

    @Override
    public void pause() {{
    }}

    @Override
    public void resume() {{
    }}

    @Override
    public void dispose() {{
    }}
}}
"#,
            package = project.root_package,
            main = project.main_class,
        ),
    )
}

pub(super) fn game(project: &Project) -> Vec<TemplateSource> {
    let package = &project.root_package;
    let main = &project.main_class;
    vec![
        (
            format!("{main}.java"),
            format!(
                r#"package {package};

import com.badlogic.gdx.Game;

/** {{@link com.badlogic.gdx.ApplicationListener}} implementation shared by all platforms. */
public class {main} extends Game {{
    @Override
    public void create() {{
        setScreen(new FirstScreen());
    }}
}}
"#
            ),
        ),
        (
            "FirstScreen.java".to_string(),
            format!(
                r#"package {package};

import com.badlogic.gdx.Screen;

/** First screen of the application. Displayed after the application is created. */
public class FirstScreen implements Screen {{
    @Override
    public void show() {{
        // Prepare your screen here.
    }}

    @Override
    public void render(float delta) {{
        // Draw your screen here. "delta" is the time since last render in seconds.
    }}

    @Override
    public void resize(int width, int height) {{
        // Resize your screen here. The parameters represent the new window size.
    }}

    @Override
    public void pause() {{
    }}

    @Override
    public void resume() {{
    }}

    @Override
    public void hide() {{
        // This method is called when another screen replaces this one.
    }}

    @Override
    public void dispose() {{
        // Destroy screen's assets here.
    }}
}}
"#
            ),
        ),
    ]
}

pub(super) fn input_processor(project: &Project) -> Vec<TemplateSource> {
    main_file(
        project,
        format!(
            r#"package {package};

import com.badlogic.gdx.ApplicationAdapter;
import com.badlogic.gdx.Gdx;
import com.badlogic.gdx.InputProcessor;

/** {{@link com.badlogic.gdx.ApplicationListener}} implementation shared by all platforms. */
public class {main} extends ApplicationAdapter implements InputProcessor {{
    @Override
    public void create() {{
        Gdx.input.setInputProcessor(this);
    }}

    @Override
    public boolean keyDown(int keycode) {{
        return false;
    }}

    @Override
    public boolean keyUp(int keycode) {{
        return false;
    }}

    @Override
    public boolean keyTyped(char character) {{
        return false;
    }}

    @Override
    public boolean touchDown(int screenX, int screenY, int pointer, int button) {{
        return false;
    }}

    @Override
    public boolean touchUp(int screenX, int screenY, int pointer, int button) {{
        return false;
    }}

    @Override
    public boolean touchCancelled(int screenX, int screenY, int pointer, int button) {{
        return false;
    }}

    @Override
    public boolean touchDragged(int screenX, int screenY, int pointer) {{
        return false;
    }}

    @Override
    public boolean mouseMoved(int screenX, int screenY) {{
        return false;
    }}

    @Override
    public boolean scrolled(float amountX, float amountY) {{
        return false;
    }}
}}
"#,
            package = project.root_package,
            main = project.main_class,
        ),
    )
}

pub(super) fn scene2d(project: &Project) -> Vec<TemplateSource> {
    main_file(
        project,
        format!(
            r#"package {package};

import com.badlogic.gdx.ApplicationAdapter;
import com.badlogic.gdx.Gdx;
import com.badlogic.gdx.graphics.Texture;
import com.badlogic.gdx.scenes.scene2d.Stage;
import com.badlogic.gdx.scenes.scene2d.ui.Image;
import com.badlogic.gdx.scenes.scene2d.ui.Table;
import com.badlogic.gdx.utils.ScreenUtils;
import com.badlogic.gdx.utils.viewport.FitViewport;

/** {{@link com.badlogic.gdx.ApplicationListener}} implementation shared by all platforms. */
public class {main} extends ApplicationAdapter {{
    private Stage stage;
    private Texture texture;

    @Override
    public void create() {{
        stage = new Stage(new FitViewport(640, 480));
        texture = new Texture("libgdx.png");

        Table root = new Table();
        root.setFillParent(true);
        root.add(new Image(texture));
        stage.addActor(root);

        Gdx.input.setInputProcessor(stage);
    }}

    @Override
    public void render() {{
        ScreenUtils.clear(0f, 0f, 0f, 1f);
        stage.act(Gdx.graphics.getDeltaTime());
        stage.draw();
    }}

    @Override
    public void resize(int width, int height) {{
        stage.getViewport().update(width, height);
    }}

    @Override
    public void dispose() {{
        stage.dispose();
        texture.dispose();
    }}
}}
"#,
            package = project.root_package,
            main = project.main_class,
        ),
    )
}
