use bevy::prelude::*;

use constants::interface::{
    BUTTON_HOVERED, BUTTON_IDLE, BUTTON_PRESSED, BUTTON_SELECTED, PANEL_BACKGROUND,
};

use crate::engine::assets::map_manifest::MapManifest;
use crate::engine::scene::composer::ActiveFloor;

#[derive(Component)]
pub struct FloorSelectRoot;

#[derive(Component)]
pub struct FloorSelectButton {
    pub index: usize,
}

// Spawns the floor selector panel with one numbered button per level
pub fn spawn_floor_select_ui(mut commands: Commands, manifest: Res<MapManifest>) {
    commands
        .spawn((
            FloorSelectRoot,
            Name::new("FloorSelectPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                padding: UiRect::all(Val::Px(8.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for index in 0..manifest.floor_count {
                parent
                    .spawn((
                        FloorSelectButton { index },
                        Name::new(format!("FloorButton{index}")),
                        Button,
                        BackgroundColor(BUTTON_IDLE),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Px(36.0),
                            height: Val::Px(36.0),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(format!("{}", index + 1)),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                    });
            }
        });
}

// Floor buttons report the selection upward; colours track hover state
pub fn floor_select_interaction(
    mut buttons: Query<
        (&Interaction, &FloorSelectButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut active: ResMut<ActiveFloor>,
) {
    for (interaction, button, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                if active.index != button.index {
                    active.index = button.index;
                    info!("Active floor: {}", button.index);
                }
                *background = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => {
                *background = BackgroundColor(if active.index == button.index {
                    BUTTON_SELECTED
                } else {
                    BUTTON_IDLE
                })
            }
        }
    }
}

// Keeps the selected button highlighted once the pointer has moved on
pub fn update_floor_select_highlight(
    active: Res<ActiveFloor>,
    mut buttons: Query<(&FloorSelectButton, &Interaction, &mut BackgroundColor), With<Button>>,
) {
    if !active.is_changed() {
        return;
    }
    for (button, interaction, mut background) in &mut buttons {
        if *interaction != Interaction::None {
            continue;
        }
        *background = BackgroundColor(if active.index == button.index {
            BUTTON_SELECTED
        } else {
            BUTTON_IDLE
        });
    }
}
