//! CSS3/SVG named colors and nearest-match lookup.
//!
//! Canonical source: the SVG specification's color keyword list, adopted by
//! CSS3 (http://www.w3.org/TR/css3-color/#svg-color). Used only by the
//! offline frame exporter, never on the render hot path.

use crate::color::Rgb;

/// The CSS3/SVG named colors. Spelling variants (gray/grey) are kept, so
/// names are not unique per RGB value; lookups return the first match.
pub const CSS3_NAMED_COLORS: &[(&str, Rgb)] = &[
    ("aliceblue", Rgb { r: 240, g: 248, b: 255 }),
    ("antiquewhite", Rgb { r: 250, g: 235, b: 215 }),
    ("aqua", Rgb { r: 0, g: 255, b: 255 }),
    ("aquamarine", Rgb { r: 127, g: 255, b: 212 }),
    ("azure", Rgb { r: 240, g: 255, b: 255 }),
    ("beige", Rgb { r: 245, g: 245, b: 220 }),
    ("bisque", Rgb { r: 255, g: 228, b: 196 }),
    ("black", Rgb { r: 0, g: 0, b: 0 }),
    ("blanchedalmond", Rgb { r: 255, g: 235, b: 205 }),
    ("blue", Rgb { r: 0, g: 0, b: 255 }),
    ("blueviolet", Rgb { r: 138, g: 43, b: 226 }),
    ("brown", Rgb { r: 165, g: 42, b: 42 }),
    ("burlywood", Rgb { r: 222, g: 184, b: 135 }),
    ("cadetblue", Rgb { r: 95, g: 158, b: 160 }),
    ("chartreuse", Rgb { r: 127, g: 255, b: 0 }),
    ("chocolate", Rgb { r: 210, g: 105, b: 30 }),
    ("coral", Rgb { r: 255, g: 127, b: 80 }),
    ("cornflowerblue", Rgb { r: 100, g: 149, b: 237 }),
    ("cornsilk", Rgb { r: 255, g: 248, b: 220 }),
    ("crimson", Rgb { r: 220, g: 20, b: 60 }),
    ("cyan", Rgb { r: 0, g: 255, b: 255 }),
    ("darkblue", Rgb { r: 0, g: 0, b: 139 }),
    ("darkcyan", Rgb { r: 0, g: 139, b: 139 }),
    ("darkgoldenrod", Rgb { r: 184, g: 134, b: 11 }),
    ("darkgray", Rgb { r: 169, g: 169, b: 169 }),
    ("darkgrey", Rgb { r: 169, g: 169, b: 169 }),
    ("darkgreen", Rgb { r: 0, g: 100, b: 0 }),
    ("darkkhaki", Rgb { r: 189, g: 183, b: 107 }),
    ("darkmagenta", Rgb { r: 139, g: 0, b: 139 }),
    ("darkolivegreen", Rgb { r: 85, g: 107, b: 47 }),
    ("darkorange", Rgb { r: 255, g: 140, b: 0 }),
    ("darkorchid", Rgb { r: 153, g: 50, b: 204 }),
    ("darkred", Rgb { r: 139, g: 0, b: 0 }),
    ("darksalmon", Rgb { r: 233, g: 150, b: 122 }),
    ("darkseagreen", Rgb { r: 143, g: 188, b: 143 }),
    ("darkslateblue", Rgb { r: 72, g: 61, b: 139 }),
    ("darkslategray", Rgb { r: 47, g: 79, b: 79 }),
    ("darkslategrey", Rgb { r: 47, g: 79, b: 79 }),
    ("darkturquoise", Rgb { r: 0, g: 206, b: 209 }),
    ("darkviolet", Rgb { r: 148, g: 0, b: 211 }),
    ("deeppink", Rgb { r: 255, g: 20, b: 147 }),
    ("deepskyblue", Rgb { r: 0, g: 191, b: 255 }),
    ("dimgray", Rgb { r: 105, g: 105, b: 105 }),
    ("dimgrey", Rgb { r: 105, g: 105, b: 105 }),
    ("dodgerblue", Rgb { r: 30, g: 144, b: 255 }),
    ("firebrick", Rgb { r: 178, g: 34, b: 34 }),
    ("floralwhite", Rgb { r: 255, g: 250, b: 240 }),
    ("forestgreen", Rgb { r: 34, g: 139, b: 34 }),
    ("fuchsia", Rgb { r: 255, g: 0, b: 255 }),
    ("gainsboro", Rgb { r: 220, g: 220, b: 220 }),
    ("ghostwhite", Rgb { r: 248, g: 248, b: 255 }),
    ("gold", Rgb { r: 255, g: 215, b: 0 }),
    ("goldenrod", Rgb { r: 218, g: 165, b: 32 }),
    ("gray", Rgb { r: 128, g: 128, b: 128 }),
    ("grey", Rgb { r: 128, g: 128, b: 128 }),
    ("green", Rgb { r: 0, g: 128, b: 0 }),
    ("greenyellow", Rgb { r: 173, g: 255, b: 47 }),
    ("honeydew", Rgb { r: 240, g: 255, b: 240 }),
    ("hotpink", Rgb { r: 255, g: 105, b: 180 }),
    ("indianred", Rgb { r: 205, g: 92, b: 92 }),
    ("indigo", Rgb { r: 75, g: 0, b: 130 }),
    ("ivory", Rgb { r: 255, g: 255, b: 240 }),
    ("khaki", Rgb { r: 240, g: 230, b: 140 }),
    ("lavender", Rgb { r: 230, g: 230, b: 250 }),
    ("lavenderblush", Rgb { r: 255, g: 240, b: 245 }),
    ("lawngreen", Rgb { r: 124, g: 252, b: 0 }),
    ("lemonchiffon", Rgb { r: 255, g: 250, b: 205 }),
    ("lightblue", Rgb { r: 173, g: 216, b: 230 }),
    ("lightcoral", Rgb { r: 240, g: 128, b: 128 }),
    ("lightcyan", Rgb { r: 224, g: 255, b: 255 }),
    ("lightgoldenrodyellow", Rgb { r: 250, g: 250, b: 210 }),
    ("lightgray", Rgb { r: 211, g: 211, b: 211 }),
    ("lightgrey", Rgb { r: 211, g: 211, b: 211 }),
    ("lightgreen", Rgb { r: 144, g: 238, b: 144 }),
    ("lightpink", Rgb { r: 255, g: 182, b: 193 }),
    ("lightsalmon", Rgb { r: 255, g: 160, b: 122 }),
    ("lightseagreen", Rgb { r: 32, g: 178, b: 170 }),
    ("lightskyblue", Rgb { r: 135, g: 206, b: 250 }),
    ("lightslategray", Rgb { r: 119, g: 136, b: 153 }),
    ("lightslategrey", Rgb { r: 119, g: 136, b: 153 }),
    ("lightsteelblue", Rgb { r: 176, g: 196, b: 222 }),
    ("lightyellow", Rgb { r: 255, g: 255, b: 224 }),
    ("lime", Rgb { r: 0, g: 255, b: 0 }),
    ("limegreen", Rgb { r: 50, g: 205, b: 50 }),
    ("linen", Rgb { r: 250, g: 240, b: 230 }),
    ("magenta", Rgb { r: 255, g: 0, b: 255 }),
    ("maroon", Rgb { r: 128, g: 0, b: 0 }),
    ("mediumaquamarine", Rgb { r: 102, g: 205, b: 170 }),
    ("mediumblue", Rgb { r: 0, g: 0, b: 205 }),
    ("mediumorchid", Rgb { r: 186, g: 85, b: 211 }),
    ("mediumpurple", Rgb { r: 147, g: 112, b: 219 }),
    ("mediumseagreen", Rgb { r: 60, g: 179, b: 113 }),
    ("mediumslateblue", Rgb { r: 123, g: 104, b: 238 }),
    ("mediumspringgreen", Rgb { r: 0, g: 250, b: 154 }),
    ("mediumturquoise", Rgb { r: 72, g: 209, b: 204 }),
    ("mediumvioletred", Rgb { r: 199, g: 21, b: 133 }),
    ("midnightblue", Rgb { r: 25, g: 25, b: 112 }),
    ("mintcream", Rgb { r: 245, g: 255, b: 250 }),
    ("mistyrose", Rgb { r: 255, g: 228, b: 225 }),
    ("moccasin", Rgb { r: 255, g: 228, b: 181 }),
    ("navajowhite", Rgb { r: 255, g: 222, b: 173 }),
    ("navy", Rgb { r: 0, g: 0, b: 128 }),
    ("oldlace", Rgb { r: 253, g: 245, b: 230 }),
    ("olive", Rgb { r: 128, g: 128, b: 0 }),
    ("olivedrab", Rgb { r: 107, g: 142, b: 35 }),
    ("orange", Rgb { r: 255, g: 165, b: 0 }),
    ("orangered", Rgb { r: 255, g: 69, b: 0 }),
    ("orchid", Rgb { r: 218, g: 112, b: 214 }),
    ("palegoldenrod", Rgb { r: 238, g: 232, b: 170 }),
    ("palegreen", Rgb { r: 152, g: 251, b: 152 }),
    ("paleturquoise", Rgb { r: 175, g: 238, b: 238 }),
    ("palevioletred", Rgb { r: 219, g: 112, b: 147 }),
    ("papayawhip", Rgb { r: 255, g: 239, b: 213 }),
    ("peachpuff", Rgb { r: 255, g: 218, b: 185 }),
    ("peru", Rgb { r: 205, g: 133, b: 63 }),
    ("pink", Rgb { r: 255, g: 192, b: 203 }),
    ("plum", Rgb { r: 221, g: 160, b: 221 }),
    ("powderblue", Rgb { r: 176, g: 224, b: 230 }),
    ("purple", Rgb { r: 128, g: 0, b: 128 }),
    ("red", Rgb { r: 255, g: 0, b: 0 }),
    ("rosybrown", Rgb { r: 188, g: 143, b: 143 }),
    ("royalblue", Rgb { r: 65, g: 105, b: 225 }),
    ("saddlebrown", Rgb { r: 139, g: 69, b: 19 }),
    ("salmon", Rgb { r: 250, g: 128, b: 114 }),
    ("sandybrown", Rgb { r: 244, g: 164, b: 96 }),
    ("seagreen", Rgb { r: 46, g: 139, b: 87 }),
    ("seashell", Rgb { r: 255, g: 245, b: 238 }),
    ("sienna", Rgb { r: 160, g: 82, b: 45 }),
    ("silver", Rgb { r: 192, g: 192, b: 192 }),
    ("skyblue", Rgb { r: 135, g: 206, b: 235 }),
    ("slateblue", Rgb { r: 106, g: 90, b: 205 }),
    ("slategray", Rgb { r: 112, g: 128, b: 144 }),
    ("slategrey", Rgb { r: 112, g: 128, b: 144 }),
    ("snow", Rgb { r: 255, g: 250, b: 250 }),
    ("springgreen", Rgb { r: 0, g: 255, b: 127 }),
    ("steelblue", Rgb { r: 70, g: 130, b: 180 }),
    ("tan", Rgb { r: 210, g: 180, b: 140 }),
    ("teal", Rgb { r: 0, g: 128, b: 128 }),
    ("thistle", Rgb { r: 216, g: 191, b: 216 }),
    ("tomato", Rgb { r: 255, g: 99, b: 71 }),
    ("turquoise", Rgb { r: 64, g: 224, b: 208 }),
    ("violet", Rgb { r: 238, g: 130, b: 238 }),
    ("wheat", Rgb { r: 245, g: 222, b: 179 }),
    ("white", Rgb { r: 255, g: 255, b: 255 }),
    ("whitesmoke", Rgb { r: 245, g: 245, b: 245 }),
    ("yellow", Rgb { r: 255, g: 255, b: 0 }),
    ("yellowgreen", Rgb { r: 154, g: 205, b: 50 }),
];

/// Name of the named color closest to `rgb` by squared channel distance.
pub fn nearest(rgb: Rgb) -> &'static str {
    let mut best = CSS3_NAMED_COLORS[0].0;
    let mut best_dist = u32::MAX;
    for &(name, candidate) in CSS3_NAMED_COLORS {
        let dist = channel_dist(candidate.r, rgb.r)
            + channel_dist(candidate.g, rgb.g)
            + channel_dist(candidate.b, rgb.b);
        if dist < best_dist {
            best = name;
            best_dist = dist;
        }
    }
    best
}

fn channel_dist(a: u8, b: u8) -> u32 {
    let d = i32::from(a) - i32::from(b);
    (d * d) as u32
}
