use swaddle_core::prelude::*;
use swaddle_devtools::{Inspector, describe_tree};
use swaddle_ui::*;

fn triangle(size: Size) -> BezPath {
    let (w, h) = (size.width as f64, size.height as f64);
    let mut path = BezPath::new();
    path.move_to((w / 2.0, 0.0));
    path.line_to((w, h));
    path.line_to((0.0, h));
    path.close_path();
    path
}

fn profile_card(name: &str, role: &str) -> View {
    let avatar = Text(name.chars().take(2).collect::<String>())
        .clip_oval()
        .sized_box_with(SizedBoxOptions {
            width: Some(48.0),
            height: Some(48.0),
            ..SizedBoxOptions::default()
        });

    let details = Column((
        Text(name).font_size(18.0),
        Text(role)
            .text_color(Color::from_hex("#AAAAAA"))
            .opacity(0.8),
    ))
    .expanded(1);

    Row((avatar, details))
        .padding_with(EdgeInsets::symmetric(16.0, 12.0))
        .constrained_box(BoxConstraints::loose(Size::new(360.0, 120.0)))
        .clip_rect()
}

fn app() -> anyhow::Result<View> {
    let badge = View::try_wrap(ViewKind::Opacity { opacity: 0.9 }, Text("new"))?
        .clip_path_with(ClipPathOptions {
            clipper: Some(CustomClipper::new(triangle)),
            ..ClipPathOptions::default()
        })
        .rotate(std::f32::consts::FRAC_PI_8)
        .align(Alignment::TOP_RIGHT);

    let broken = ErrorBoundary(
        |info| Text(format!("could not build: {}", info.message)).padding(),
        || Text("half visible").opacity(1.5),
    );

    Ok(Stack((
        profile_card("Jane Doe", "Maintainer"),
        badge,
        broken.offstage(true),
    ))
    .center()
    .theme_with(ThemeData::light(), true))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let root = app()?;

    let mut inspector = Inspector::new();
    inspector.toggle();
    inspector.frame(&root);
    if let Some(stats) = &inspector.last {
        log::info!(
            "built {} nodes ({} wrappers), depth {}",
            stats.nodes,
            stats.wrappers,
            stats.depth
        );
    }

    println!("{}", describe_tree(&root));
    Ok(())
}
