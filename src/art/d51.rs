//! The D51 steam locomotive.

use super::{Art, ArtBlock, SubFrameSet};

const BODY: [&str; 7] = [
    r"      ====        ________                ___________ ",
    r"  _D _|  |_______/        \__I_I_____===__|_________| ",
    r"   |(_)---  |   H\________/ |   |        =|___ ___|   ",
    r"   /     |  |   H  |  |     |   |         ||_| |_||   ",
    r"  |      |  |   H  |__--------------------| [___] |   ",
    r"  | ________|___H__/__|_____/[][]~\_______|       |   ",
    r"  |/ |   |-----------I_____I [][] []  D   |=======|__ ",
];

const WHEELS_1: [&str; 3] = [
    r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
    r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
    r"  \_/      \O=====O=====O=====O_/      \_/            ",
];

const WHEELS_2: [&str; 3] = [
    r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
    r" |/-=|___|=O=====O=====O=====O   |_____/~\___/        ",
    r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
];

const WHEELS_3: [&str; 3] = [
    r"__/ =| o |=-O=====O=====O=====O \ ____Y___________|__ ",
    r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
    r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
];

const WHEELS_4: [&str; 3] = [
    r"__/ =| o |=-~O=====O=====O=====O\ ____Y___________|__ ",
    r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
    r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
];

const WHEELS_5: [&str; 3] = [
    r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
    r" |/-=|___|=   O=====O=====O=====O|_____/~\___/        ",
    r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
];

const WHEELS_6: [&str; 3] = [
    r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
    r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
    r"  \_/      \_O=====O=====O=====O/      \_/            ",
];

/// The big D51 engine with its six wheel phases.
///
/// Phases are cycled 1, 6, 5, 4, 3, 2 so the connecting rod turns forward
/// while the engine runs to the left.
pub fn d51() -> Art {
    let wheels = [WHEELS_1, WHEELS_6, WHEELS_5, WHEELS_4, WHEELS_3, WHEELS_2]
        .into_iter()
        .map(|lines| ArtBlock::new(&lines))
        .collect();

    Art::new("d51", ArtBlock::new(&BODY), Some(SubFrameSet::new(wheels)))
}
