//! Player control: auto-bounce, pose switching, steering and wrap

use super::state::{HostCommand, Player, PlayerPose, SoundCue};
use super::tick::TickInput;
use crate::consts::{HORIZONTAL_SPEED, JUMP_IMPULSE};
use crate::horizontal_wrap;

/// Resolve one tick of player control.
///
/// Reads the contact flags and velocity the host reported for this tick and
/// writes back velocity, pose and (on wrap) position.
pub fn control_player(
    player: &mut Player,
    input: &TickInput,
    world_width: f32,
    commands: &mut Vec<HostCommand>,
) {
    let touching_down = player.touching.down;

    // Every ground touch bounces; the bunny never stays grounded
    if touching_down {
        player.vel.y = -JUMP_IMPULSE;
        player.pose = PlayerPose::Jumping;
        commands.push(HostCommand::SetPlayerPose(PlayerPose::Jumping));
        commands.push(HostCommand::PlaySound(SoundCue::Jump));
    }

    if player.vel.y > 0.0 && player.pose == PlayerPose::Jumping {
        player.pose = PlayerPose::Standing;
        commands.push(HostCommand::SetPlayerPose(PlayerPose::Standing));
    }

    player.vel.x = steer(player, input, touching_down);
    commands.push(HostCommand::SetPlayerVelocity(player.vel));

    let x = horizontal_wrap(player.pos.x, player.half_width(), world_width);
    if x != player.pos.x {
        player.pos.x = x;
        commands.push(HostCommand::SetPlayerPosition(player.pos));
    }
}

/// Horizontal velocity: left, then right, then pointer drag, else stop
fn steer(player: &mut Player, input: &TickInput, touching_down: bool) -> f32 {
    if touching_down {
        player.drag_anchor = None;
        return 0.0;
    }

    if input.left {
        -HORIZONTAL_SPEED
    } else if input.right {
        HORIZONTAL_SPEED
    } else if let Some(pointer_x) = input.pointer {
        let anchor = *player.drag_anchor.get_or_insert(pointer_x);
        if pointer_x < anchor {
            -HORIZONTAL_SPEED
        } else {
            HORIZONTAL_SPEED
        }
    } else {
        player.drag_anchor = None;
        0.0
    }
}
