//! Wire enums used by the record grammars.
//!
//! Each enum is declared with [`wire_enum!`](crate::wire::wire_enum), which
//! keeps variants and wire strings in a single table. Helper methods that
//! classify variants (node counts, member dimensions, axis positions) live
//! next to the declarations.

use crate::{entity::EntityKind, wire::wire_enum};

wire_enum! {
    /// Verb following the keyword, deciding whether an explicit index follows.
    #[derive(Default)]
    pub enum SetCommand {
        #[default]
        Set => "SET",
        SetAt => "SET_AT",
        SetNoIndex => "SET_NOINDEX",
    }
}

wire_enum! {
    /// Display colour of a record.
    #[derive(Default)]
    pub enum Colour {
        #[default]
        NoRgb => "NO_RGB",
        Black => "BLACK",
        Maroon => "MAROON",
        DarkRed => "DARK_RED",
        Red => "RED",
        OrangeRed => "ORANGE_RED",
        DarkGreen => "DARK_GREEN",
        Green => "GREEN",
        Olive => "OLIVE",
        DarkOrange => "DARK_ORANGE",
        Orange => "ORANGE",
        Gold => "GOLD",
        LawnGreen => "LAWN_GREEN",
        Lime => "LIME",
        Chartreuse => "CHARTREUSE",
        Yellow => "YELLOW",
        DarkGoldenrod => "DARK_GOLDENROD",
        SaddleBrown => "SADDLE_BROWN",
        Chocolate => "CHOCOLATE",
        Goldenrod => "GOLDENROD",
        Firebrick => "FIREBRICK",
        ForestGreen => "FOREST_GREEN",
        OliveDrab => "OLIVE_DRAB",
        Brown => "BROWN",
        Sienna => "SIENNA",
        DarkOliveGreen => "DARK_OLIVE_GREEN",
        GreenYellow => "GREEN_YELLOW",
        Limegreen => "LIMEGREEN",
        YellowGreen => "YELLOW_GREEN",
        Crimson => "CRIMSON",
        Peru => "PERU",
        Tomato => "TOMATO",
        DarkSlateGrey => "DARK_SLATE_GREY",
        Coral => "CORAL",
        SeaGreen => "SEA_GREEN",
        IndianRed => "INDIAN_RED",
        SandyBrown => "SANDY_BROWN",
        DimGrey => "DIM_GREY",
        DarkKhaki => "DARK_KHAKI",
        MidnightBlue => "MIDNIGHT_BLUE",
        MediumSeaGreen => "MEDIUM_SEA_GREEN",
        Salmon => "SALMON",
        DarkSalmon => "DARK_SALMON",
        LightSalmon => "LIGHT_SALMON",
        SpringGreen => "SPRING_GREEN",
        Navy => "NAVY",
        Purple => "PURPLE",
        Teal => "TEAL",
        Grey => "GREY",
        LightCoral => "LIGHT_CORAL",
        Indigo => "INDIGO",
        MediumVioletRed => "MEDIUM_VIOLET_RED",
        Burlywood => "BURLYWOOD",
        DarkBlue => "DARK_BLUE",
        DarkMagenta => "DARK_MAGENTA",
        DarkSlateBlue => "DARK_SLATE_BLUE",
        DarkCyan => "DARK_CYAN",
        Tan => "TAN",
        Khaki => "KHAKI",
        RosyBrown => "ROSY_BROWN",
        DarkSeaGreen => "DARK_SEA_GREEN",
        SlateGrey => "SLATE_GREY",
        LightGreen => "LIGHT_GREEN",
        DeepPink => "DEEP_PINK",
        PaleVioletRed => "PALE_VIOLET_RED",
        PaleGreen => "PALE_GREEN",
        LightSlateGrey => "LIGHT_SLATE_GREY",
        MediumSpringGreen => "MEDIUM_SPRING_GREEN",
        CadetBlue => "CADET_BLUE",
        DarkGrey => "DARK_GREY",
        LightSeaGreen => "LIGHT_SEA_GREEN",
        MediumAquamarine => "MEDIUM_AQUAMARINE",
        PaleGoldenrod => "PALE_GOLDENROD",
        NavajoWhite => "NAVAJO_WHITE",
        Wheat => "WHEAT",
        HotPink => "HOT_PINK",
        SteelBlue => "STEEL_BLUE",
        Moccasin => "MOCCASIN",
        PeachPuff => "PEACH_PUFF",
        Silver => "SILVER",
        LightPink => "LIGHT_PINK",
        Bisque => "BISQUE",
        Pink => "PINK",
        DarkOrchid => "DARK_ORCHID",
        MediumTurquoise => "MEDIUM_TURQUOISE",
        MediumBlue => "MEDIUM_BLUE",
        SlateBlue => "SLATE_BLUE",
        BlanchedAlmond => "BLANCHED_ALMOND",
        LemonChiffon => "LEMON_CHIFFON",
        Turquoise => "TURQUOISE",
        DarkTurquoise => "DARK_TURQUOISE",
        LightGoldenrodYellow => "LIGHT_GOLDENROD_YELLOW",
        DarkViolet => "DARK_VIOLET",
        MediumOrchid => "MEDIUM_ORCHID",
        LightGrey => "LIGHT_GREY",
        Aquamarine => "AQUAMARINE",
        PapayaWhip => "PAPAYA_WHIP",
        Orchid => "ORCHID",
        AntiqueWhite => "ANTIQUE_WHITE",
        Thistle => "THISTLE",
        MediumPurple => "MEDIUM_PURPLE",
        Gainsboro => "GAINSBORO",
        Beige => "BEIGE",
        Cornsilk => "CORNSILK",
        Plum => "PLUM",
        LightSteelBlue => "LIGHT_STEEL_BLUE",
        LightYellow => "LIGHT_YELLOW",
        RoyalBlue => "ROYAL_BLUE",
        MistyRose => "MISTY_ROSE",
        BlueViolet => "BLUE_VIOLET",
        LightBlue => "LIGHT_BLUE",
        Powderblue => "POWDERBLUE",
        Linen => "LINEN",
        Oldlace => "OLDLACE",
        Skyblue => "SKYBLUE",
        CornflowerBlue => "CORNFLOWER_BLUE",
        MediumSlateBlue => "MEDIUM_SLATE_BLUE",
        Violet => "VIOLET",
        PaleTurquoise => "PALE_TURQUOISE",
        Seashell => "SEASHELL",
        FloralWhite => "FLORAL_WHITE",
        Honeydew => "HONEYDEW",
        Ivory => "IVORY",
        LavenderBlush => "LAVENDER_BLUSH",
        WhiteSmoke => "WHITE_SMOKE",
        LightSkyBlue => "LIGHT_SKY_BLUE",
        Lavender => "LAVENDER",
        Snow => "SNOW",
        MintCream => "MINT_CREAM",
        Blue => "BLUE",
        Magenta => "MAGENTA",
        DodgerBlue => "DODGER_BLUE",
        DeepSkyBlue => "DEEP_SKY_BLUE",
        AliceBlue => "ALICE_BLUE",
        GhostWhite => "GHOST_WHITE",
        Cyan => "CYAN",
        LightCyan => "LIGHT_CYAN",
        Azure => "AZURE",
        White => "WHITE"
    }
}

wire_enum! {
    /// Analysis element type.
    #[derive(Default)]
    pub enum ElementType {
        Bar => "BAR",
        #[default]
        Beam => "BEAM",
        Brick8 => "BRICK8",
        Cable => "CABLE",
        Damper => "DAMPER",
        Link => "LINK",
        Pyramid5 => "PYRAMID5",
        Quad4 => "QUAD4",
        Quad8 => "QUAD8",
        Rod => "ROD",
        Spacer => "SPACER",
        Spring => "SPRING",
        Strut => "STRUT",
        Tetra4 => "TETRA4",
        Tie => "TIE",
        Triangle3 => "TRI3",
        Triangle6 => "TRI6",
        Wedge6 => "WEDGE6",
    }
}

impl ElementType {
    /// Number of topology fields an element of this type carries.
    pub fn node_count(self) -> usize {
        match self {
            ElementType::Brick8 | ElementType::Quad8 => 8,
            ElementType::Triangle6 | ElementType::Wedge6 => 6,
            ElementType::Pyramid5 => 5,
            ElementType::Quad4 | ElementType::Tetra4 => 4,
            ElementType::Triangle3 => 3,
            _ => 2,
        }
    }
}

/// Dimensionality of a design member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberDimension {
    One,
    Two,
    Three,
}

wire_enum! {
    /// Design member type.
    #[derive(Default)]
    pub enum MemberType {
        #[default]
        Beam => "BEAM",
        Column => "COLUMN",
        Generic1d => "1D_GENERIC",
        Void1d => "1D_VOID_CUTTER",
        Slab => "SLAB",
        Wall => "WALL",
        Generic2d => "2D_GENERIC",
        Void2d => "2D_VOID_CUTTER",
        Generic3d => "3D_GENERIC",
    }
}

impl MemberType {
    /// Whether the member is a line, area or volume member.
    pub fn dimension(self) -> MemberDimension {
        match self {
            MemberType::Beam | MemberType::Column | MemberType::Generic1d | MemberType::Void1d => {
                MemberDimension::One
            }
            MemberType::Slab | MemberType::Wall | MemberType::Generic2d | MemberType::Void2d => {
                MemberDimension::Two
            }
            MemberType::Generic3d => MemberDimension::Three,
        }
    }
}

wire_enum! {
    /// Flag announcing whether a release block follows.
    #[derive(Default)]
    pub enum ReleaseInclusion {
        #[default]
        NotIncluded => "NO_RLS",
        Included => "RLS",
        Stiff => "STIFF",
    }
}

impl ReleaseInclusion {
    /// `true` when a release block follows the flag on the wire.
    pub fn is_included(self) -> bool {
        !matches!(self, ReleaseInclusion::NotIncluded)
    }
}

wire_enum! {
    /// Release state of one axis at one end of a 1D entity.
    #[derive(Default)]
    pub enum ReleaseCode {
        /// `F`: the axis is not released.
        #[default]
        Free => "F",
        /// `R`: the axis is released.
        Released => "R",
        /// `K`: the axis is restrained by a spring of given stiffness.
        Stiff => "K",
    }
}

wire_enum! {
    /// The six degrees of freedom, in wire order.
    #[derive(Default)]
    pub enum AxisDirection6 {
        #[default]
        X => "X",
        Y => "Y",
        Z => "Z",
        XX => "XX",
        YY => "YY",
        ZZ => "ZZ",
    }
}

impl AxisDirection6 {
    /// Position of the axis in six-axis arrays.
    pub fn position(self) -> usize {
        match self {
            AxisDirection6::X => 0,
            AxisDirection6::Y => 1,
            AxisDirection6::Z => 2,
            AxisDirection6::XX => 3,
            AxisDirection6::YY => 4,
            AxisDirection6::ZZ => 5,
        }
    }

    /// `true` for the three rotational axes.
    pub fn is_rotation(self) -> bool {
        self.position() >= 3
    }
}

wire_enum! {
    /// Named nodal restraints.
    pub enum NodeRestraintKeyword {
        Free => "free",
        Pin => "pin",
        Fix => "fix",
    }
}

wire_enum! {
    /// Named node axis references.
    pub enum NodeAxisKeyword {
        Global => "GLOBAL",
        XElevation => "X_ELEV",
        YElevation => "Y_ELEV",
        Vertical => "VERTICAL",
    }
}

wire_enum! {
    /// End restraint of a 1D member, also used by explicit restraint definitions.
    #[derive(Default)]
    pub enum MemberRestraint {
        #[default]
        Free => "Free",
        Fixed => "Fixed",
        Pinned => "Pinned",
        FullRotational => "Full rotational",
        PartialRotational => "Partial rotational",
        TopFlangeLateral => "Top flange lateral",
    }
}

wire_enum! {
    /// Keyword selecting the effective length definition of a 1D member.
    pub enum EffectiveLengthType {
        Automatic => "AUTOMATIC",
        EffectiveLength => "EFF_LEN",
        Explicit => "EXPLICIT",
    }
}

wire_enum! {
    /// Reference point for the load height of a 1D member.
    #[derive(Default)]
    pub enum LoadHeightReference {
        #[default]
        NotSet => "",
        ShearCentre => "SHR_CENTRE",
        TopFlange => "TOP_FLANGE",
        BottomFlange => "BOT_FLANGE",
    }
}

wire_enum! {
    /// Surfaces of a member exposed to fire.
    #[derive(Default)]
    pub enum ExposedSurfaces {
        #[default]
        All => "ALL",
        Three => "THREE",
        TopBottom => "TOP_BOT",
        Sides => "SIDES",
        One => "ONE",
        NoSurface => "NONE",
    }
}

wire_enum! {
    /// Element type used when a member is meshed for analysis.
    #[derive(Default)]
    pub enum AnalysisType {
        #[default]
        Beam => "BEAM",
        Bar => "BAR",
        Strut => "STRUT",
        Tie => "TIE",
        Rod => "ROD",
        Link => "LINK",
        Spring => "SPRING",
        Cable => "CABLE",
        Spacer => "SPACER",
        Damper => "DAMPER",
        ElementType => "EL_TYPE",
        Linear => "LINEAR",
        Quadratic => "QUADRATIC",
        Rigid => "RIGID",
    }
}

wire_enum! {
    /// Fire resistance period in minutes.
    #[derive(Default)]
    pub enum FireResistance {
        #[default]
        Undefined => "0",
        HalfHour => "30",
        OneHour => "60",
        NinetyMinutes => "90",
        TwoHours => "120",
        ThreeHours => "180",
        FourHours => "240",
    }
}

wire_enum! {
    /// Prefix letter of a bracketed group inside a topology field.
    pub enum GroupTag {
        Void => "V",
        Points => "P",
        Polyline => "L",
        AdditionalArea => "A",
    }
}

wire_enum! {
    /// Kind of entity an assembly is built from.
    #[derive(Default)]
    pub enum AssemblyEntityType {
        #[default]
        Element => "ELEMENT",
        Member => "MEMBER",
    }
}

impl AssemblyEntityType {
    /// Index space the assembly's entity list refers to.
    pub fn entity_kind(self) -> EntityKind {
        match self {
            AssemblyEntityType::Element => EntityKind::Element,
            AssemblyEntityType::Member => EntityKind::Member,
        }
    }
}

wire_enum! {
    /// Interpolation used for the assembly reference curve.
    #[derive(Default)]
    pub enum CurveType {
        Circular => "CIRCULAR",
        #[default]
        Lagrange => "LAGRANGE",
    }
}

wire_enum! {
    /// Keyword selecting how assembly result points are defined.
    pub enum PointDefinition {
        Points => "POINTS",
        Spacing => "SPACING",
        Storey => "STOREY",
        Explicit => "EXPLICIT",
    }
}

wire_enum! {
    /// Named axis references of a beam load.
    pub enum LoadBeamAxisKeyword {
        Global => "GLOBAL",
        Local => "LOCAL",
        Natural => "NATURAL",
    }
}

wire_enum! {
    /// The keywords sharing the beam load index space.
    pub enum LoadBeamKind {
        Point => "LOAD_BEAM_POINT",
        Udl => "LOAD_BEAM_UDL",
        Line => "LOAD_BEAM_LINE",
        Patch => "LOAD_BEAM_PATCH",
        Trilinear => "LOAD_BEAM_TRILIN",
    }
}

wire_enum! {
    /// Boolean fields written as `YES`/`NO`.
    pub enum YesNo {
        Yes => "YES",
        No => "NO",
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        matches!(value, YesNo::Yes)
    }
}

wire_enum! {
    /// Whether a member is active or a dummy.
    pub enum Activity {
        Active => "ACTIVE",
        Dummy => "DUMMY",
    }
}

wire_enum! {
    /// Whether a 1D member carries an offset block.
    pub enum OffsetFlag {
        Offset => "OFF",
        NoOffset => "NO_OFF",
    }
}

wire_enum! {
    /// Automatic or manual end offset.
    pub enum OffsetMode {
        Automatic => "AUTO",
        Manual => "MAN",
    }
}
