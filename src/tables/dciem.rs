//! DCIEM air decompression reference data.
//!
//! One table per reference depth. Rows are sorted by bottom time and carry the
//! repetitive group, total decompression minutes and the 15/12/9/6 m stops.

use super::{row, DepthTable, NO_STOPS};

pub(super) static DCIEM_TABLES: [DepthTable; 15] = [
    DepthTable {
        depth_m: 6,
        entries: &[
            row(30, "A", 1, NO_STOPS),
            row(60, "B", 1, NO_STOPS),
            row(90, "C", 1, NO_STOPS),
            row(120, "D", 1, NO_STOPS),
            row(150, "E", 1, NO_STOPS),
            row(180, "F", 1, NO_STOPS),
            row(240, "G", 1, NO_STOPS),
            row(300, "H", 1, NO_STOPS),
            row(360, "I", 1, NO_STOPS),
            row(420, "J", 1, NO_STOPS),
            row(480, "K", 1, NO_STOPS),
            row(600, "L", 1, NO_STOPS),
            row(720, "M", 1, NO_STOPS),
        ],
    },
    DepthTable {
        depth_m: 9,
        entries: &[
            row(30, "A", 1, NO_STOPS),
            row(60, "C", 1, NO_STOPS),
            row(90, "D", 1, NO_STOPS),
            row(120, "F", 1, NO_STOPS),
            row(150, "G", 1, NO_STOPS),
            row(180, "H", 1, NO_STOPS),
            row(240, "J", 1, NO_STOPS),
            row(270, "K", 1, NO_STOPS),
            row(300, "L", 1, NO_STOPS),
            row(330, "M", 3, NO_STOPS),
            row(360, "N", 5, NO_STOPS),
            row(400, "O", 7, NO_STOPS),
            row(420, "P", 10, NO_STOPS),
            row(450, "Q", 15, NO_STOPS),
            row(480, "R", 20, NO_STOPS),
        ],
    },
    DepthTable {
        depth_m: 12,
        entries: &[
            row(20, "A", 1, NO_STOPS),
            row(30, "B", 1, NO_STOPS),
            row(60, "C", 1, NO_STOPS),
            row(90, "D", 1, NO_STOPS),
            row(120, "F", 1, NO_STOPS),
            row(150, "G", 1, NO_STOPS),
            row(180, "H", 1, NO_STOPS),
            row(210, "J", 1, NO_STOPS),
            row(240, "M", 5, NO_STOPS),
            row(270, "N", 15, NO_STOPS),
            row(300, "O", 25, NO_STOPS),
            row(330, "P", 39, NO_STOPS),
            row(360, "Q", 53, NO_STOPS),
        ],
    },
    DepthTable {
        depth_m: 15,
        entries: &[
            row(10, "A", 1, NO_STOPS),
            row(20, "B", 1, NO_STOPS),
            row(30, "C", 1, NO_STOPS),
            row(40, "D", 1, NO_STOPS),
            row(50, "E", 1, NO_STOPS),
            row(60, "F", 1, NO_STOPS),
            row(75, "G", 1, NO_STOPS),
            row(100, "I", 5, NO_STOPS),
            row(120, "K", 10, NO_STOPS),
            row(125, "K", 13, NO_STOPS),
            row(130, "L", 16, NO_STOPS),
            row(140, "M", 21, NO_STOPS),
            row(150, "NRG", 26, NO_STOPS),
            row(160, "NRG", 31, NO_STOPS),
            row(170, "NRG", 35, NO_STOPS),
            row(180, "NRG", 40, NO_STOPS),
            row(200, "NRG", 50, NO_STOPS),
            row(220, "NRG", 59, NO_STOPS),
            row(240, "NRG", 70, NO_STOPS),
            row(260, "NRG", 81, NO_STOPS),
            row(280, "NRG", 91, NO_STOPS),
        ],
    },
    DepthTable {
        depth_m: 18,
        entries: &[
            row(10, "A", 1, NO_STOPS),
            row(20, "D", 1, NO_STOPS),
            row(30, "E", 1, NO_STOPS),
            row(40, "F", 1, NO_STOPS),
            row(50, "G", 1, NO_STOPS),
            row(60, "I", 5, [0, 0, 0, 5]),
            row(80, "J", 10, [0, 0, 0, 10]),
            row(90, "K", 16, [0, 0, 0, 16]),
            row(100, "L", 24, [0, 0, 0, 24]),
            row(110, "M", 30, [0, 0, 0, 30]),
            row(120, "NRG", 36, [0, 0, 0, 36]),
            row(130, "NRG", 42, [0, 0, 0, 2]),
            row(140, "NRG", 48, [0, 0, 0, 2]),
            row(150, "NRG", 55, [0, 0, 0, 3]),
            row(160, "NRG", 62, [0, 0, 0, 3]),
            row(170, "NRG", 69, [0, 0, 0, 4]),
            row(180, "NRG", 77, [0, 0, 0, 4]),
            row(190, "NRG", 85, [0, 0, 0, 5]),
            row(200, "NRG", 94, [0, 0, 0, 7]),
            row(210, "NRG", 104, [0, 0, 0, 13]),
            row(220, "NRG", 114, [0, 0, 0, 17]),
            row(230, "NRG", 124, [0, 0, 0, 21]),
            row(240, "NRG", 133, [0, 0, 0, 24]),
        ],
    },
    DepthTable {
        depth_m: 21,
        entries: &[
            row(10, "A", 0, NO_STOPS),
            row(15, "B", 1, NO_STOPS),
            row(20, "C", 1, NO_STOPS),
            row(25, "D", 1, NO_STOPS),
            row(30, "D", 1, NO_STOPS),
            row(35, "E", 1, NO_STOPS),
            row(40, "F", 5, [0, 0, 0, 5]),
            row(50, "G", 10, [0, 0, 0, 10]),
            row(60, "H", 12, [0, 0, 0, 12]),
            row(70, "J", 20, [0, 0, 0, 17]),
            row(80, "K", 29, [0, 0, 0, 3]),
            row(90, "M", 37, [0, 0, 0, 4]),
            row(100, "N", 45, [0, 0, 0, 5]),
            row(110, "NRG", 53, [0, 0, 0, 6]),
            row(120, "NRG", 61, [0, 0, 0, 7]),
            row(130, "NRG", 70, [0, 0, 0, 8]),
            row(140, "NRG", 80, [0, 0, 0, 9]),
            row(150, "NRG", 92, [0, 0, 0, 15]),
            row(160, "NRG", 105, [0, 0, 0, 20]),
            row(170, "NRG", 118, [0, 0, 0, 25]),
            row(180, "NRG", 130, [0, 0, 0, 29]),
            row(190, "NRG", 143, [0, 0, 0, 34]),
            row(200, "NRG", 155, [0, 0, 0, 38]),
        ],
    },
    DepthTable {
        depth_m: 24,
        entries: &[
            row(10, "A", 2, NO_STOPS),
            row(15, "C", 2, NO_STOPS),
            row(20, "E", 2, NO_STOPS),
            row(25, "F", 2, NO_STOPS),
            row(30, "G", 5, NO_STOPS),
            row(40, "H", 11, [0, 0, 0, 5]),
            row(50, "I", 15, [0, 0, 11, 4]),
            row(55, "J", 20, [0, 0, 15, 5]),
            row(60, "K", 27, [0, 0, 21, 6]),
            row(65, "L", 32, [0, 0, 25, 7]),
            row(70, "M", 37, [0, 0, 30, 7]),
            row(75, "N", 42, [0, 0, 34, 8]),
            row(80, "NRG", 46, [0, 0, 37, 9]),
            row(85, "NRG", 51, [0, 0, 42, 9]),
            row(90, "NRG", 56, [0, 0, 46, 10]),
            row(95, "NRG", 61, [0, 0, 50, 11]),
            row(100, "NRG", 66, [0, 0, 55, 11]),
            row(110, "NRG", 78, [0, 2, 64, 12]),
            row(120, "NRG", 93, [0, 3, 72, 18]),
            row(130, "NRG", 109, [0, 4, 82, 23]),
            row(140, "NRG", 125, [0, 4, 93, 28]),
            row(150, "NRG", 142, [0, 5, 104, 33]),
            row(160, "NRG", 158, [0, 5, 114, 39]),
        ],
    },
    DepthTable {
        depth_m: 27,
        entries: &[
            row(5, "A", 2, NO_STOPS),
            row(10, "B", 2, NO_STOPS),
            row(15, "C", 2, NO_STOPS),
            row(20, "D", 2, NO_STOPS),
            row(25, "E", 7, NO_STOPS),
            row(30, "F", 11, [0, 0, 0, 2]),
            row(40, "H", 16, [0, 0, 0, 6]),
            row(45, "I", 21, [0, 0, 0, 7]),
            row(50, "J", 28, [0, 0, 0, 8]),
            row(55, "K", 35, [0, 0, 0, 9]),
            row(60, "L", 41, [0, 0, 2, 8]),
            row(65, "NRG", 47, [0, 0, 3, 8]),
            row(70, "NRG", 52, [0, 0, 3, 9]),
            row(75, "NRG", 58, [0, 0, 4, 9]),
            row(80, "NRG", 65, [0, 0, 4, 10]),
            row(85, "NRG", 71, [0, 0, 5, 10]),
            row(90, "NRG", 79, [0, 0, 5, 14]),
            row(95, "NRG", 87, [0, 0, 6, 17]),
            row(100, "NRG", 96, [0, 0, 6, 20]),
            row(110, "NRG", 115, [0, 0, 7, 26]),
            row(120, "NRG", 134, [0, 0, 8, 31]),
        ],
    },
    DepthTable {
        depth_m: 30,
        entries: &[
            row(5, "A", 2, NO_STOPS),
            row(10, "B", 2, NO_STOPS),
            row(15, "C", 2, NO_STOPS),
            row(20, "E", 8, NO_STOPS),
            row(25, "F", 12, [0, 0, 0, 3]),
            row(30, "G", 15, [0, 0, 0, 5]),
            row(35, "H", 18, [0, 0, 0, 7]),
            row(40, "I", 25, [0, 0, 0, 9]),
            row(45, "J", 34, [0, 0, 3, 8]),
            row(50, "K", 41, [0, 0, 4, 8]),
            row(55, "NRG", 48, [0, 0, 5, 9]),
            row(60, "NRG", 55, [0, 0, 6, 9]),
            row(65, "NRG", 62, [0, 0, 6, 10]),
            row(70, "NRG", 69, [0, 0, 7, 10]),
            row(75, "NRG", 78, [0, 0, 8, 14]),
            row(80, "NRG", 87, [0, 0, 8, 18]),
            row(85, "NRG", 97, [0, 0, 9, 21]),
            row(90, "NRG", 107, [0, 2, 8, 24]),
            row(95, "NRG", 120, [0, 3, 8, 27]),
            row(100, "NRG", 132, [0, 3, 8, 31]),
            row(105, "NRG", 144, [0, 3, 9, 34]),
            row(110, "NRG", 158, [0, 4, 10, 38]),
        ],
    },
    DepthTable {
        depth_m: 33,
        entries: &[
            row(5, "A", 2, NO_STOPS),
            row(10, "B", 2, NO_STOPS),
            row(12, "C", 2, NO_STOPS),
            row(15, "D", 5, NO_STOPS),
            row(20, "F", 12, [0, 0, 0, 3]),
            row(25, "G", 16, [0, 0, 0, 6]),
            row(30, "H", 19, [0, 0, 0, 9]),
            row(35, "I", 27, [0, 0, 3, 8]),
            row(40, "J", 37, [0, 0, 5, 8]),
            row(45, "K", 46, [0, 0, 6, 9]),
            row(50, "M", 54, [0, 0, 7, 9]),
            row(55, "N", 62, [0, 0, 8, 10]),
            row(60, "NRG", 70, [0, 2, 7, 10]),
            row(65, "NRG", 79, [0, 3, 7, 12]),
            row(70, "NRG", 92, [0, 4, 7, 19]),
            row(75, "NRG", 103, [0, 4, 8, 23]),
            row(80, "NRG", 116, [0, 5, 8, 26]),
            row(85, "NRG", 130, [0, 5, 9, 30]),
            row(90, "NRG", 144, [0, 6, 9, 34]),
            row(95, "NRG", 158, [0, 6, 9, 38]),
            row(100, "NRG", 172, [0, 7, 9, 42]),
            row(105, "NRG", 187, [0, 7, 12, 45]),
            row(110, "NRG", 201, [0, 8, 15, 48]),
        ],
    },
    DepthTable {
        depth_m: 36,
        entries: &[
            row(5, "A", 2, NO_STOPS),
            row(10, "C", 2, NO_STOPS),
            row(15, "D", 10, NO_STOPS),
            row(20, "F", 15, [0, 0, 0, 5]),
            row(25, "G", 19, [0, 0, 0, 9]),
            row(30, "I", 26, [0, 0, 4, 8]),
            row(35, "J", 38, [0, 0, 6, 8]),
            row(40, "K", 48, [0, 0, 8, 8]),
            row(45, "M", 57, [0, 3, 6, 10]),
            row(50, "N", 68, [0, 4, 7, 12]),
            row(55, "NRG", 78, [0, 5, 7, 13]),
            row(60, "NRG", 90, [0, 6, 7, 18]),
            row(65, "NRG", 102, [0, 6, 8, 22]),
            row(70, "NRG", 116, [0, 7, 8, 27]),
            row(75, "NRG", 133, [0, 8, 8, 31]),
            row(80, "NRG", 149, [2, 6, 9, 35]),
            row(85, "NRG", 166, [3, 6, 10, 40]),
            row(90, "NRG", 183, [3, 7, 13, 42]),
            row(95, "NRG", 200, [4, 6, 16, 46]),
            row(100, "NRG", 216, [4, 7, 19, 50]),
        ],
    },
    DepthTable {
        depth_m: 39,
        entries: &[
            row(5, "A", 2, NO_STOPS),
            row(8, "B", 2, NO_STOPS),
            row(10, "C", 2, NO_STOPS),
            row(15, "E", 12, [0, 0, 0, 4]),
            row(20, "G", 18, [0, 0, 0, 8]),
            row(25, "H", 23, [0, 0, 5, 7]),
            row(30, "J", 37, [0, 0, 7, 8]),
            row(35, "K", 48, [0, 3, 6, 9]),
            row(40, "M", 59, [0, 4, 7, 9]),
            row(45, "N", 70, [0, 5, 7, 12]),
            row(50, "NRG", 82, [0, 7, 7, 15]),
            row(55, "NRG", 97, [2, 6, 8, 20]),
            row(60, "NRG", 112, [3, 6, 8, 25]),
            row(65, "NRG", 127, [4, 6, 8, 30]),
            row(70, "NRG", 148, [4, 7, 9, 34]),
            row(75, "NRG", 167, [5, 6, 11, 39]),
            row(80, "NRG", 186, [5, 7, 14, 42]),
            row(85, "NRG", 206, [6, 7, 17, 47]),
            row(90, "NRG", 224, [6, 8, 20, 52]),
        ],
    },
    DepthTable {
        depth_m: 42,
        entries: &[
            row(7, "B", 2, NO_STOPS),
            row(10, "E", 7, NO_STOPS),
            row(15, "F", 15, [0, 0, 0, 6]),
            row(20, "G", 21, [0, 0, 4, 7]),
            row(25, "I", 32, [0, 0, 7, 8]),
            row(30, "K", 46, [0, 4, 6, 8]),
            row(35, "L", 58, [0, 5, 7, 9]),
            row(40, "N", 70, [0, 7, 7, 10]),
            row(45, "O", 85, [3, 5, 8, 16]),
            row(50, "NRG", 101, [4, 6, 8, 21]),
            row(55, "NRG", 119, [5, 6, 8, 27]),
            row(60, "NRG", 139, [6, 6, 9, 32]),
            row(65, "NRG", 159, [6, 7, 10, 37]),
            row(70, "NRG", 182, [3, 5, 14, 40]),
            row(75, "NRG", 204, [3, 5, 18, 45]),
            row(80, "NRG", 225, [3, 6, 21, 51]),
            row(85, "NRG", 244, [3, 5, 25, 57]),
            row(90, "NRG", 263, [4, 6, 28, 65]),
        ],
    },
    DepthTable {
        depth_m: 45,
        entries: &[
            row(7, "B", 3, NO_STOPS),
            row(10, "D", 9, NO_STOPS),
            row(15, "F", 17, [0, 0, 0, 8]),
            row(20, "H", 24, [0, 0, 6, 7]),
            row(25, "J", 40, [0, 4, 5, 8]),
            row(30, "K", 55, [0, 6, 6, 9]),
            row(35, "M", 67, [0, 5, 6, 10]),
            row(40, "O", 84, [0, 6, 7, 15]),
            row(45, "NRG", 101, [0, 5, 8, 21]),
            row(50, "NRG", 121, [0, 7, 8, 27]),
            row(55, "NRG", 144, [3, 5, 9, 33]),
            row(60, "NRG", 168, [3, 5, 12, 38]),
            row(65, "NRG", 194, [4, 5, 16, 42]),
            row(70, "NRG", 218, [5, 5, 20, 48]),
            row(75, "NRG", 240, [5, 6, 24, 55]),
            row(80, "NRG", 261, [6, 6, 28, 63]),
        ],
    },
    DepthTable {
        depth_m: 48,
        entries: &[
            row(6, "B", 3, NO_STOPS),
            row(10, "D", 11, NO_STOPS),
            row(15, "G", 20, [0, 0, 4, 6]),
            row(20, "H", 30, [0, 0, 8, 8]),
            row(25, "K", 49, [0, 6, 6, 8]),
            row(30, "L", 64, [0, 5, 7, 10]),
            row(35, "N", 80, [0, 5, 8, 13]),
            row(40, "NRG", 99, [0, 6, 8, 20]),
            row(45, "NRG", 121, [3, 5, 9, 26]),
            row(50, "NRG", 146, [4, 5, 9, 33]),
            row(55, "NRG", 173, [5, 5, 13, 38]),
            row(60, "NRG", 201, [6, 5, 17, 43]),
            row(65, "NRG", 227, [7, 5, 22, 50]),
            row(70, "NRG", 251, [7, 6, 26, 58]),
        ],
    },
];
