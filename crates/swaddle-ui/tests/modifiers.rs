use swaddle_core::*;
use swaddle_ui::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

type Op = fn(View) -> View;

fn op(expected: ViewKind, f: Op) -> (ViewKind, Op) {
    (expected, f)
}

fn transform(transform: Matrix4, alignment: Option<Alignment>) -> ViewKind {
    ViewKind::Transform {
        transform,
        origin: None,
        alignment,
        transform_hit_tests: true,
    }
}

fn table() -> Vec<(ViewKind, Op)> {
    vec![
        op(
            ViewKind::Padding {
                insets: EdgeInsets::all(8.0),
            },
            |v| v.padding(),
        ),
        op(
            ViewKind::Center {
                width_factor: None,
                height_factor: None,
            },
            |v| v.center(),
        ),
        op(
            ViewKind::Align {
                alignment: Alignment::TOP_LEFT,
            },
            |v| v.align(Alignment::TOP_LEFT),
        ),
        op(ViewKind::AspectRatio { ratio: 1.5 }, |v| v.aspect_ratio(1.5)),
        op(
            ViewKind::Baseline {
                baseline: 12.0,
                baseline_type: TextBaseline::Ideographic,
            },
            |v| v.baseline(12.0, TextBaseline::Ideographic),
        ),
        op(
            ViewKind::ConstrainedBox {
                constraints: BoxConstraints::loose(Size::new(10.0, 10.0)),
            },
            |v| v.constrained_box(BoxConstraints::loose(Size::new(10.0, 10.0))),
        ),
        op(ViewKind::Expanded { flex: 2 }, |v| v.expanded(2)),
        op(
            ViewKind::FittedBox {
                fit: BoxFit::Contain,
                alignment: Alignment::CENTER,
            },
            |v| v.fitted_box(),
        ),
        op(
            ViewKind::FractionallySizedBox {
                alignment: Alignment::CENTER,
                width_factor: None,
                height_factor: None,
            },
            |v| v.fractionally_sized_box(),
        ),
        op(ViewKind::IntrinsicHeight, |v| v.intrinsic_height()),
        op(
            ViewKind::IntrinsicWidth {
                step_width: None,
                step_height: None,
            },
            |v| v.intrinsic_width(),
        ),
        op(
            ViewKind::LimitedBox {
                max_width: f32::INFINITY,
                max_height: f32::INFINITY,
            },
            |v| v.limited_box(),
        ),
        op(ViewKind::Offstage { offstage: true }, |v| v.offstage(true)),
        op(ViewKind::Offstage { offstage: false }, |v| v.offstage(false)),
        op(
            ViewKind::OverflowBox {
                alignment: Alignment::CENTER,
                min_width: None,
                max_width: None,
                min_height: None,
                max_height: None,
            },
            |v| v.overflow_box(),
        ),
        op(
            ViewKind::SizedBox {
                alignment: Alignment::CENTER,
                width: None,
                height: None,
            },
            |v| v.sized_box(),
        ),
        op(
            ViewKind::SizedOverflowBox {
                size: Size::square(1.0),
                alignment: Alignment::CENTER,
            },
            |v| v.sized_overflow_box(Size::square(1.0)),
        ),
        op(transform(Matrix4::identity(), None), |v| {
            v.transform(Matrix4::identity())
        }),
        op(transform(Matrix4::rotation_z(0.5), Some(Alignment::CENTER)), |v| {
            v.rotate(0.5)
        }),
        op(transform(Matrix4::translation(1.0, 2.0, 0.0), None), |v| {
            v.translate(Vec2::new(1.0, 2.0))
        }),
        op(
            transform(Matrix4::diagonal3(2.0, 2.0, 1.0), Some(Alignment::CENTER)),
            |v| v.scale(2.0),
        ),
        op(
            ViewKind::ClipOval {
                clipper: None,
                clip_behavior: Clip::AntiAlias,
            },
            |v| v.clip_oval(),
        ),
        op(
            ViewKind::ClipPath {
                clipper: None,
                clip_behavior: Clip::AntiAlias,
            },
            |v| v.clip_path(),
        ),
        op(
            ViewKind::ClipRect {
                clipper: None,
                clip_behavior: Clip::HardEdge,
            },
            |v| v.clip_rect(),
        ),
        op(ViewKind::Opacity { opacity: 0.25 }, |v| v.opacity(0.25)),
        op(
            ViewKind::Theme {
                data: ThemeData::light(),
                is_top_level: false,
            },
            |v| v.theme(ThemeData::light()),
        ),
    ]
}

#[test]
fn test_every_modifier_wraps_target_unchanged() {
    for (expected_kind, modify) in table() {
        let kind = expected_kind.name();
        let target = Text("target");
        let expected = target.clone();

        let wrapped = modify(target);
        assert_eq!(wrapped.kind, expected_kind);
        assert_eq!(wrapped.children.len(), 1, "{kind}");
        assert_eq!(wrapped.child(), Some(&expected), "{kind}");
        assert_ne!(wrapped.id, expected.id, "{kind}");
    }
}

#[test]
fn test_modifiers_nest_instead_of_merging() {
    for (expected_kind, modify) in table() {
        let target = Text("target");
        let target_id = target.id;

        let twice = modify(modify(target));
        let inner = twice.child().expect("outer wrapper has a child");
        assert_eq!(twice.kind, expected_kind);
        assert_eq!(inner.kind, expected_kind);
        assert_ne!(twice.id, inner.id);
        assert_eq!(inner.child().map(|c| c.id), Some(target_id));
    }
}

#[test]
fn test_defaults() {
    let c = || Text("c");

    assert_eq!(
        c().padding().kind,
        ViewKind::Padding {
            insets: EdgeInsets::all(8.0)
        }
    );
    assert_eq!(
        c().center().kind,
        ViewKind::Center {
            width_factor: None,
            height_factor: None
        }
    );
    assert_eq!(
        c().fitted_box().kind,
        ViewKind::FittedBox {
            fit: BoxFit::Contain,
            alignment: Alignment::CENTER
        }
    );
    assert_eq!(
        c().fractionally_sized_box().kind,
        ViewKind::FractionallySizedBox {
            alignment: Alignment::CENTER,
            width_factor: None,
            height_factor: None
        }
    );
    assert_eq!(
        c().intrinsic_width().kind,
        ViewKind::IntrinsicWidth {
            step_width: None,
            step_height: None
        }
    );
    assert_eq!(
        c().limited_box().kind,
        ViewKind::LimitedBox {
            max_width: f32::INFINITY,
            max_height: f32::INFINITY
        }
    );
    assert_eq!(
        c().overflow_box().kind,
        ViewKind::OverflowBox {
            alignment: Alignment::CENTER,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None
        }
    );
    assert_eq!(
        c().sized_box().kind,
        ViewKind::SizedBox {
            alignment: Alignment::CENTER,
            width: None,
            height: None
        }
    );
    assert_eq!(
        c().transform(Matrix4::identity()).kind,
        ViewKind::Transform {
            transform: Matrix4::identity(),
            origin: None,
            alignment: None,
            transform_hit_tests: true
        }
    );
    assert_eq!(
        c().translate(Vec2::new(3.0, 4.0)).kind,
        ViewKind::Transform {
            transform: Matrix4::translation(3.0, 4.0, 0.0),
            origin: None,
            alignment: None,
            transform_hit_tests: true
        }
    );
    assert_eq!(
        c().scale(3.0).kind,
        ViewKind::Transform {
            transform: Matrix4::diagonal3(3.0, 3.0, 1.0),
            origin: None,
            alignment: Some(Alignment::CENTER),
            transform_hit_tests: true
        }
    );
    assert_eq!(
        c().clip_oval().kind,
        ViewKind::ClipOval {
            clipper: None,
            clip_behavior: Clip::AntiAlias
        }
    );
    assert_eq!(
        c().clip_path().kind,
        ViewKind::ClipPath {
            clipper: None,
            clip_behavior: Clip::AntiAlias
        }
    );
    assert_eq!(
        c().clip_rect().kind,
        ViewKind::ClipRect {
            clipper: None,
            clip_behavior: Clip::HardEdge
        }
    );
    assert_eq!(
        c().theme(ThemeData::dark()).kind,
        ViewKind::Theme {
            data: ThemeData::dark(),
            is_top_level: false
        }
    );
}

#[test]
fn test_explicit_options_reach_the_wrapper() {
    let clipper = CustomClipper::new(|size: Size| Rect {
        x: 0.0,
        y: 0.0,
        w: size.width / 2.0,
        h: size.height,
    });
    let clipped = Text("c").clip_rect_with(ClipRectOptions {
        clipper: Some(clipper.clone()),
        clip_behavior: Clip::AntiAliasWithSaveLayer,
    });
    assert_eq!(
        clipped.kind,
        ViewKind::ClipRect {
            clipper: Some(clipper),
            clip_behavior: Clip::AntiAliasWithSaveLayer
        }
    );

    let sized = Text("c").sized_box_with(SizedBoxOptions {
        width: Some(40.0),
        ..SizedBoxOptions::default()
    });
    assert_eq!(
        sized.kind,
        ViewKind::SizedBox {
            alignment: Alignment::CENTER,
            width: Some(40.0),
            height: None
        }
    );

    let top_level = Text("c").theme_with(ThemeData::light(), true);
    assert!(matches!(
        top_level.kind,
        ViewKind::Theme {
            is_top_level: true,
            ..
        }
    ));

    let pinned = Text("c").translate_with(Vec2::new(1.0, 1.0), false);
    assert!(matches!(
        pinned.kind,
        ViewKind::Transform {
            transform_hit_tests: false,
            ..
        }
    ));
}

#[test]
fn test_padding_scenario() {
    let c = Text("hello");
    let expected = c.clone();

    let padded = c.padding();
    assert_eq!(
        padded.kind,
        ViewKind::Padding {
            insets: EdgeInsets::all(8.0)
        }
    );
    assert_eq!(padded.child(), Some(&expected));
}

#[test]
fn test_aspect_ratio_scenario() {
    let c = Text("hello");
    let expected = c.clone();

    let boxed = c.aspect_ratio(2.0);
    assert_eq!(boxed.kind, ViewKind::AspectRatio { ratio: 2.0 });
    assert_eq!(boxed.into_child(), Some(expected));
}

#[test]
fn test_rotate_is_pure_rotation_about_center() {
    let c = Text("hello");
    let expected = c.clone();
    let rotated = c.rotate(10.0);

    let ViewKind::Transform {
        transform,
        origin,
        alignment,
        transform_hit_tests,
    } = rotated.kind
    else {
        panic!("expected Transform, got {:?}", rotated.kind);
    };
    assert_eq!(transform, Matrix4::rotation_z(10.0));
    assert!(transform_hit_tests);
    assert_eq!(rotated.children, vec![expected]);

    let size = Size::new(100.0, 50.0);
    let resolved = resolve_transform(transform, origin, alignment, size);
    let center = Vec2::new(50.0, 25.0);
    assert!(close(resolved.transform_point(center), center));

    // (50, 0) from the center turns by 10 rad
    let (sin, cos) = 10.0f32.sin_cos();
    let expected_edge = Vec2::new(50.0 + 50.0 * cos, 25.0 + 50.0 * sin);
    assert!(close(
        resolved.transform_point(Vec2::new(100.0, 25.0)),
        expected_edge
    ));
}

#[test]
fn test_sized_overflow_box_scenario() {
    let c = Text("hello");
    let expected = c.clone();

    let boxed = c.sized_overflow_box(Size::new(1.0, 1.0));
    assert_eq!(
        boxed.kind,
        ViewKind::SizedOverflowBox {
            size: Size::new(1.0, 1.0),
            alignment: Alignment::CENTER
        }
    );
    assert_eq!(boxed.child(), Some(&expected));
}

#[test]
fn test_chain_nests_outermost_last() {
    let c = Text("hello");
    let expected = c.clone();

    let chained = c.clip_oval().translate(Vec2::new(10.0, 20.0)).padding();

    assert!(matches!(chained.kind, ViewKind::Padding { .. }));
    let translated = chained.child().expect("padding child");
    assert_eq!(
        translated.kind,
        ViewKind::Transform {
            transform: Matrix4::translation(10.0, 20.0, 0.0),
            origin: None,
            alignment: None,
            transform_hit_tests: true
        }
    );
    let clipped = translated.child().expect("transform child");
    assert!(matches!(clipped.kind, ViewKind::ClipOval { .. }));
    assert_eq!(clipped.child(), Some(&expected));
}

#[test]
fn test_scale_pivots_on_origin_and_alignment() {
    let scaled = Text("c").scale_with(
        2.0,
        ScaleOptions {
            origin: Some(Vec2::new(10.0, 0.0)),
            alignment: Alignment::TOP_LEFT,
            transform_hit_tests: true,
        },
    );
    let ViewKind::Transform {
        transform,
        origin,
        alignment,
        ..
    } = scaled.kind
    else {
        panic!("expected Transform");
    };
    let resolved = resolve_transform(transform, origin, alignment, Size::new(40.0, 40.0));
    let pivot = Vec2::new(10.0, 0.0);
    assert!(close(resolved.transform_point(pivot), pivot));
    assert!(close(
        resolved.transform_point(Vec2::new(20.0, 5.0)),
        Vec2::new(30.0, 10.0)
    ));
}

#[test]
#[should_panic(expected = "AspectRatio ratio must be finite and positive, got 0")]
fn test_invalid_parameters_propagate() {
    Text("c").aspect_ratio(0.0);
}

#[test]
fn test_error_boundary_recovers_from_invalid_wrapper() {
    let view = ErrorBoundary(
        |info| Text(format!("error: {}", info.message)),
        || Text("c").opacity(-1.0).padding(),
    );
    assert_eq!(
        view.kind,
        ViewKind::Text {
            text: "error: Opacity must be between 0.0 and 1.0, got -1".into(),
            color: Color::WHITE,
            font_size: 16.0
        }
    );

    let fine = ErrorBoundary(|_| Text("fallback"), || Text("c").opacity(1.0));
    assert_eq!(fine.kind, ViewKind::Opacity { opacity: 1.0 });
}

#[test]
fn test_modifiers_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let target = Text(format!("t{i}"));
                let target_id = target.id;
                let view = target.padding().rotate(i as f32).opacity(0.5);
                (view, target_id)
            })
        })
        .collect();

    for handle in handles {
        let (view, target_id) = handle.join().expect("thread panicked");
        let chain: Vec<_> = std::iter::successors(Some(&view), |v| v.child()).collect();
        assert_eq!(chain.len(), 4);
        assert_eq!(chain[3].id, target_id);
    }
}

#[test]
fn test_row_children_keep_their_modifiers() {
    let row = Row((
        Text("a").expanded(1),
        Text("b").expanded(2),
        Box().sized_box_with(SizedBoxOptions {
            width: Some(8.0),
            ..SizedBoxOptions::default()
        }),
    ));
    let kinds: Vec<_> = row.children.iter().map(|c| c.kind.name()).collect();
    assert_eq!(kinds, vec!["Expanded", "Expanded", "SizedBox"]);
    assert!(row.child().is_none());
}
