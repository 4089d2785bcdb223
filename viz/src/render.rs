use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use minijinja::{context, AutoEscape, Environment};

use crate::{error::Error, layout::Figure};

const TEMPLATE_NAME: &str = "figure.svg";

const FIGURE_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="{{ figure.width }}" height="{{ figure.height }}" viewBox="0 0 {{ figure.width }} {{ figure.height }}" font-family="monospace">
  <rect x="0" y="0" width="{{ figure.width }}" height="{{ figure.height }}" fill="white"/>
  <text x="{{ figure.title.x }}" y="{{ figure.title.y }}" font-size="{{ figure.title.size }}" font-weight="bold" text-anchor="middle" dominant-baseline="central">{{ figure.title.text }}</text>
  <text x="{{ figure.subtitle.x }}" y="{{ figure.subtitle.y }}" font-size="{{ figure.subtitle.size }}" text-anchor="middle" dominant-baseline="central">{{ figure.subtitle.text }}</text>
{%- for sep in figure.separators %}
  <rect class="separator" x="{{ sep.x }}" y="{{ sep.y }}" width="{{ sep.width }}" height="{{ sep.height }}" fill="black"/>
{%- endfor %}
{%- for tile in figure.tiles %}
  <g class="{{ tile.kind }}">
    <rect x="{{ tile.rect.x }}" y="{{ tile.rect.y }}" width="{{ tile.rect.width }}" height="{{ tile.rect.height }}" fill="{{ tile.fill }}"/>
    <text x="{{ tile.caption.x }}" y="{{ tile.caption.y }}" font-size="{{ tile.caption.size }}" text-anchor="middle" dominant-baseline="central">{{ tile.caption.text }}</text>
    <text x="{{ tile.label.x }}" y="{{ tile.label.y }}" font-size="{{ tile.label.size }}" text-anchor="middle" dominant-baseline="central">{{ tile.label.text }}</text>
  </g>
{%- endfor %}
</svg>
"#;

fn environment() -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    // Names and types come from the IDL, e.g. `option<u64>`
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template(TEMPLATE_NAME, FIGURE_TEMPLATE)?;
    Ok(env)
}

/// Render a figure as a standalone SVG document
pub fn render(figure: &Figure) -> Result<String, Error> {
    let env = environment()?;
    let template = env.get_template(TEMPLATE_NAME)?;
    Ok(template.render(context! { figure => figure })?)
}

/// The figure's file name. The program name comes from the IDL and must be
/// a single plain path component.
fn file_name(program: &str) -> Result<String, Error> {
    let mut components = Path::new(program).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !program.contains(&['/', '\\'][..]) => {
            Ok(format!("{}.svg", program))
        }
        _ => Err(Error::InvalidProgramName(program.to_string())),
    }
}

/// Write `<out_dir>/<program>.svg`, creating `out_dir` if needed
pub fn write(figure: &Figure, out_dir: &Path) -> Result<PathBuf, Error> {
    let svg_name = file_name(&figure.name)?;
    let svg = render(figure)?;

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(svg_name);
    fs::write(&path, svg)?;
    Ok(path)
}
