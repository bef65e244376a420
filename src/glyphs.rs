//! Line art for each event icon.
//!
//! Coordinates are literal positions on the 128x128 canvas, tuned to read at
//! 20-48 px once the icon is scaled down. Main silhouettes use
//! [`Weight::Bold`]; interior detail uses [`Weight::Thin`].

use crate::layer::{Glyph, Weight};

use Weight::{Bold, Fine, Hairline, Thin};

/// Leaf with a center vein.
pub fn life() -> Glyph {
    Glyph::new()
        .ellipse([36, 26, 92, 104], Bold)
        .line(&[(64, 30), (64, 102)], Bold)
        .line(&[(64, 66), (90, 46)], Bold)
        .line(&[(64, 78), (40, 54)], Bold)
}

/// Briefcase.
pub fn work() -> Glyph {
    Glyph::new()
        .rounded_rect([30, 56, 98, 100], 12, Bold)
        .rounded_rect([44, 40, 84, 56], 10, Bold)
        .line(&[(30, 76), (98, 76)], Thin)
        .line(&[(54, 76), (54, 92)], Thin)
        .line(&[(74, 76), (74, 92)], Thin)
}

/// Heart drawn as one closed stroke.
pub fn love() -> Glyph {
    Glyph::new().line(
        &[
            (40, 52),
            (36, 72),
            (64, 104),
            (92, 72),
            (88, 52),
            (64, 64),
            (40, 52),
        ],
        Bold,
    )
}

/// Party popper with streamers.
pub fn celebration() -> Glyph {
    Glyph::new()
        .polygon(&[(36, 88), (52, 36), (92, 104)], Bold)
        .line(&[(52, 36), (94, 28)], Thin)
        .line(&[(48, 46), (32, 32)], Thin)
        .arc([70, 18, 110, 58], 200, 300, Thin)
}

/// Cake with three candles.
pub fn birthday() -> Glyph {
    let mut glyph = Glyph::new()
        .rounded_rect([34, 70, 94, 106], 10, Bold)
        .line(&[(34, 86), (94, 86)], Thin);
    for x in [44, 64, 84] {
        glyph = glyph
            .line(&[(x, 52), (x, 70)], Bold)
            .ellipse([x - 6, 44, x + 6, 56], Bold);
    }
    glyph
}

/// Mortarboard with tassel.
pub fn graduation() -> Glyph {
    Glyph::new()
        .polygon(&[(28, 60), (64, 42), (100, 60), (64, 78), (28, 60)], Bold)
        .rect([48, 78, 80, 92], Bold)
        .line(&[(64, 52), (64, 102)], Thin)
        .ellipse([64, 102, 72, 110], Bold)
}

/// Plane in climb.
pub fn flight() -> Glyph {
    Glyph::new()
        .line(
            &[(28, 78), (92, 52), (86, 40), (108, 32), (96, 60), (36, 86)],
            Bold,
        )
        .line(&[(44, 82), (54, 106)], Bold)
        .line(&[(72, 66), (102, 82)], Thin)
}

/// Bus.
pub fn travel() -> Glyph {
    let mut glyph = Glyph::new()
        .rounded_rect([34, 48, 102, 94], 20, Bold)
        .line(&[(34, 72), (102, 72)], Thin)
        .line(&[(48, 56), (48, 68)], Thin)
        .line(&[(72, 56), (72, 68)], Thin);
    for cx in [52, 84] {
        glyph = glyph.ellipse([cx - 12, 90, cx + 12, 114], Bold);
    }
    glyph
}

/// House with door.
pub fn home() -> Glyph {
    Glyph::new()
        .polygon(
            &[(32, 76), (64, 44), (96, 76), (96, 110), (32, 110), (32, 76)],
            Bold,
        )
        .line(&[(32, 76), (96, 76)], Bold)
        .rect([58, 84, 70, 110], Bold)
}

/// Dumbbell.
pub fn fitness() -> Glyph {
    Glyph::new()
        .line(&[(24, 70), (48, 70)], Bold)
        .line(&[(80, 70), (104, 70)], Bold)
        .rounded_rect([36, 52, 92, 88], 12, Bold)
        .line(&[(56, 52), (56, 88)], Bold)
        .line(&[(72, 52), (72, 88)], Bold)
}

/// Open book.
pub fn study() -> Glyph {
    Glyph::new()
        .rounded_rect([32, 48, 64, 108], 12, Bold)
        .rounded_rect([64, 48, 96, 108], 12, Bold)
        .line(&[(48, 60), (48, 108)], Thin)
        .line(&[(80, 60), (80, 108)], Thin)
        .line(&[(32, 70), (96, 70)], Thin)
}

/// Game controller.
pub fn game() -> Glyph {
    Glyph::new()
        .rounded_rect([30, 72, 98, 104], 20, Bold)
        .line(&[(46, 88), (62, 88)], Bold)
        .line(&[(54, 80), (54, 96)], Bold)
        .ellipse([74, 82, 86, 94], Bold)
        .ellipse([90, 82, 102, 94], Bold)
}

/// Beamed eighth notes.
pub fn music() -> Glyph {
    Glyph::new()
        .line(&[(46, 34), (46, 94)], Bold)
        .line(&[(46, 34), (94, 26)], Bold)
        .line(&[(94, 26), (94, 76)], Bold)
        .ellipse([30, 84, 56, 106], Bold)
        .ellipse([78, 74, 104, 96], Bold)
}

/// Fork, knife and bowl.
pub fn eating() -> Glyph {
    let mut glyph = Glyph::new().line(&[(36, 30), (36, 100)], Bold);
    for offset in [-8, -2, 4, 10] {
        glyph = glyph.line(&[(36 + offset, 30), (36 + offset, 48)], Thin);
    }
    glyph
        .line(&[(96, 28), (96, 104)], Bold)
        .arc([34, 60, 100, 112], 0, 180, Bold)
        .line(&[(38, 110), (96, 110)], Bold)
}

/// Slice with toppings.
pub fn pizza() -> Glyph {
    let mut glyph = Glyph::new()
        .polygon(&[(40, 36), (96, 60), (52, 110)], Bold)
        .line(&[(62, 70), (72, 96)], Thin)
        .line(&[(54, 86), (78, 74)], Thin);
    for (x, y) in [(60, 56), (74, 64), (64, 84)] {
        glyph = glyph.ellipse([x - 4, y - 4, x + 4, y + 4], Fine);
    }
    glyph
}

/// Mug with steam.
pub fn coffee() -> Glyph {
    Glyph::new()
        .rounded_rect([36, 48, 96, 104], 18, Bold)
        .line(&[(36, 78), (96, 78)], Thin)
        .arc([92, 58, 118, 94], 270, 450, Bold)
        .arc([44, 24, 72, 52], 0, 90, Thin)
}

/// Cistern and bowl.
pub fn toilet() -> Glyph {
    Glyph::new()
        .rect([42, 32, 90, 60], Bold)
        .rounded_rect([32, 58, 98, 112], 24, Bold)
        .line(&[(64, 60), (64, 112)], Bold)
}

/// Crescent with three stars.
pub fn moon() -> Glyph {
    let mut glyph = Glyph::new()
        .arc([30, 26, 98, 94], 40, 320, Bold)
        .arc([44, 26, 112, 94], 40, 320, Bold);
    for (x, y) in [(38, 30), (98, 22), (102, 60)] {
        glyph = glyph
            .line(&[(x, y), (x + 6, y + 10)], Fine)
            .line(&[(x + 6, y), (x, y + 10)], Fine);
    }
    glyph
}

/// Sneaker.
pub fn walk() -> Glyph {
    Glyph::new()
        .line(
            &[
                (26, 86),
                (42, 56),
                (74, 56),
                (102, 90),
                (108, 110),
                (22, 110),
                (26, 86),
            ],
            Bold,
        )
        .line(&[(46, 80), (86, 80)], Thin)
        .line(&[(30, 102), (106, 102)], Thin)
}

/// Basket with handle.
pub fn picnic() -> Glyph {
    Glyph::new()
        .rounded_rect([30, 70, 98, 112], 18, Bold)
        .line(&[(30, 90), (98, 90)], Thin)
        .line(&[(30, 100), (98, 100)], Thin)
        .line(&[(46, 70), (78, 36)], Bold)
        .line(&[(62, 70), (62, 36)], Bold)
}

/// Head with trailing thought bubbles.
pub fn thinking() -> Glyph {
    Glyph::new()
        .ellipse([40, 40, 100, 100], Bold)
        .line(&[(64, 100), (64, 116)], Bold)
        .ellipse([26, 102, 44, 120], Thin)
        .ellipse([16, 120, 32, 132], Fine)
}

/// Palette and brush.
pub fn art() -> Glyph {
    let mut glyph = Glyph::new().ellipse([28, 40, 108, 116], Bold);
    for hole in [[80, 50, 96, 66], [96, 70, 112, 86], [68, 84, 84, 100]] {
        glyph = glyph.ellipse(hole, Thin);
    }
    glyph
        .line(&[(44, 78), (70, 118)], Thin)
        .line(&[(50, 84), (76, 44)], Thin)
}

/// Handset.
pub fn phone() -> Glyph {
    Glyph::new()
        .rounded_rect([40, 22, 88, 118], 18, Bold)
        .line(&[(40, 92), (88, 92)], Thin)
        .ellipse([58, 100, 70, 112], Thin)
}

/// Ball with pentagon panel.
pub fn soccer() -> Glyph {
    let mut glyph = Glyph::new()
        .ellipse([30, 30, 98, 98], Bold)
        .line(
            &[(64, 40), (82, 54), (74, 80), (54, 80), (46, 54), (64, 40)],
            Thin,
        );
    for seam in [
        [(64, 40), (40, 64)],
        [(64, 40), (88, 64)],
        [(54, 80), (40, 104)],
        [(74, 80), (88, 104)],
    ] {
        glyph = glyph.line(&seam, Thin);
    }
    glyph
}

/// Ball with seams.
pub fn basketball() -> Glyph {
    Glyph::new()
        .ellipse([30, 30, 98, 98], Bold)
        .line(&[(30, 64), (98, 64)], Thin)
        .arc([18, 32, 86, 122], 270, 430, Thin)
        .arc([42, 18, 120, 86], 90, 250, Thin)
}

/// Target with arrow.
pub fn archery() -> Glyph {
    Glyph::new()
        .ellipse([30, 30, 100, 100], Bold)
        .ellipse([42, 42, 88, 88], Thin)
        .ellipse([54, 54, 76, 76], Thin)
        .line(&[(82, 28), (118, 64)], Bold)
        .polygon(&[(118, 64), (104, 48), (126, 50)], Hairline)
}

/// Swimmer above two waves.
pub fn swimming() -> Glyph {
    Glyph::new()
        .arc([20, 96, 112, 128], 200, 340, Thin)
        .arc([28, 86, 120, 118], 200, 340, Thin)
        .line(&[(38, 72), (64, 64)], Bold)
        .arc([50, 56, 90, 96], 180, 300, Bold)
        .ellipse([76, 62, 92, 78], Thin)
}

/// Four-petal flower on a stem.
pub fn flower() -> Glyph {
    let mut glyph = Glyph::new();
    for petal in [
        [52, 28, 76, 60],
        [52, 68, 76, 100],
        [34, 50, 70, 86],
        [58, 50, 94, 86],
    ] {
        glyph = glyph.ellipse(petal, Thin);
    }
    glyph
        .ellipse([52, 58, 76, 82], Bold)
        .line(&[(64, 82), (64, 120)], Bold)
        .line(&[(64, 96), (48, 116)], Thin)
        .line(&[(64, 102), (82, 120)], Thin)
}
